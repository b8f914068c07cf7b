use thiserror::Error;

use crate::domain::{MatchId, PlayerId};

/// Data-shape problems found in the records handed to the ranking.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankingError {
    #[error(
        "Invalid match record {match_id}: winner {winner_id} is not one of the players ({first_player_id}, {second_player_id})"
    )]
    InvalidMatchRecord {
        match_id: MatchId,
        winner_id: PlayerId,
        first_player_id: PlayerId,
        second_player_id: PlayerId,
    },
}

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::domain::PlayerId;

/// Category label -> standings, best first. Iterates categories in ascending order.
pub type Standings = BTreeMap<String, Vec<PlayerStanding>>;

/// Category label -> positioned table rows, padded to the minimum length.
pub type Ranking = BTreeMap<String, Vec<RankingRow>>;

/// Aggregated score of a player who played at least one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStanding {
    pub player_id: PlayerId,
    pub name: String,
    pub category: String,
    pub points: u32,
    pub matches_played: u32,
    pub matches_won: u32,
    pub tournaments_played: u32,
    pub tournaments_won: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingRow {
    pub position: u32,
    pub player_id: Option<PlayerId>,
    pub name: String,
    pub category: String,
    pub points: u32,
    pub tournaments_played: u32,
    pub tournaments_won: u32,
}

impl RankingRow {
    pub fn from_standing(position: u32, standing: PlayerStanding) -> Self {
        Self {
            position,
            player_id: Some(standing.player_id),
            name: standing.name,
            category: standing.category,
            points: standing.points,
            tournaments_played: standing.tournaments_played,
            tournaments_won: standing.tournaments_won,
        }
    }

    pub fn placeholder(position: u32, name: &str, category: &str) -> Self {
        Self {
            position,
            player_id: None,
            name: name.to_string(),
            category: category.to_string(),
            points: 0,
            tournaments_played: 0,
            tournaments_won: 0,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.player_id.is_none()
    }
}

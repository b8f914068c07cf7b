use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type PlayerId = i64;
pub type TournamentId = i64;
pub type MatchId = i64;

/// Registered player. Only `id`, `full_name` and `category` take part in ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub full_name: String,
    pub category: String,
    pub birth_date: Option<NaiveDate>,
    pub club: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Player {
    pub fn new(id: PlayerId, full_name: &str, category: &str) -> Self {
        Self {
            id,
            full_name: full_name.to_string(),
            category: category.to_string(),
            birth_date: None,
            club: None,
            email: None,
            phone: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub category: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: Option<String>,
}

/// Single played match between two players.
///
/// `winner_id` is expected to be one of the two opponents; see
/// [`Match::has_consistent_winner`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub first_player_id: PlayerId,
    pub second_player_id: PlayerId,
    pub winner_id: PlayerId,
    pub date: NaiveDate,
    pub round: Option<String>,
}

impl Match {
    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.first_player_id == player_id || self.second_player_id == player_id
    }

    pub fn is_won_by(&self, player_id: PlayerId) -> bool {
        self.winner_id == player_id
    }

    pub fn has_consistent_winner(&self) -> bool {
        self.involves(self.winner_id)
    }

    pub fn round_is(&self, label: &str) -> bool {
        self.round.as_deref() == Some(label)
    }
}

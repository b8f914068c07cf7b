pub mod aggregate;
pub mod table;
pub mod types;

pub use aggregate::{aggregate, validate_matches};
pub use table::{build_table, build_tables};
pub use types::{PlayerStanding, Ranking, RankingRow, Standings};

use crate::config::RankingSettings;
use crate::domain::{Match, Player};
use crate::errors::RankingError;

/// Validates the matches, scores every player and lays out the padded tables.
pub fn build_ranking(
    players: &[Player],
    matches: &[Match],
    settings: &RankingSettings,
) -> Result<Ranking, RankingError> {
    validate_matches(matches)?;
    let standings = aggregate(players, matches, settings);
    Ok(build_tables(standings, settings))
}

use super::types::{PlayerStanding, Ranking, RankingRow, Standings};
use crate::config::RankingSettings;

/// Numbers the standings 1..N and appends placeholder rows up to
/// `settings.min_table_rows`. Never drops or reorders real rows.
pub fn build_table(
    category: &str,
    standings: Vec<PlayerStanding>,
    settings: &RankingSettings,
) -> Vec<RankingRow> {
    let mut rows: Vec<RankingRow> = standings
        .into_iter()
        .zip(1..)
        .map(|(standing, position)| RankingRow::from_standing(position, standing))
        .collect();

    while rows.len() < settings.min_table_rows {
        let position = rows.len() as u32 + 1;
        rows.push(RankingRow::placeholder(position, &settings.placeholder_name, category));
    }

    rows
}

pub fn build_tables(standings: Standings, settings: &RankingSettings) -> Ranking {
    standings
        .into_iter()
        .map(|(category, rows)| {
            let table = build_table(&category, rows, settings);
            (category, table)
        })
        .collect()
}

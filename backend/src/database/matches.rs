use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::params;

use super::connection::DbConn;
use crate::domain::{Match, PlayerId, TournamentId};

pub struct NewMatch<'a> {
    pub tournament_id: TournamentId,
    pub first_player_id: PlayerId,
    pub second_player_id: PlayerId,
    pub winner_id: PlayerId,
    pub date: NaiveDate,
    pub round: Option<&'a str>,
}

pub fn insert_match(conn: &mut DbConn, new_match: &NewMatch) -> Result<Match> {
    let sql = "INSERT INTO matches (tournament_id, first_player_id, second_player_id, winner_id, date, round) VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING id, tournament_id, first_player_id, second_player_id, winner_id, date, round";

    conn.query_row(
        sql,
        params![
            new_match.tournament_id,
            new_match.first_player_id,
            new_match.second_player_id,
            new_match.winner_id,
            new_match.date,
            new_match.round
        ],
        parse_match_row,
    )
    .context("Failed to insert match")
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        tournament_id: row.get(1)?,
        first_player_id: row.get(2)?,
        second_player_id: row.get(3)?,
        winner_id: row.get(4)?,
        date: row.get(5)?,
        round: row.get(6)?,
    })
}

/// All matches, ordered by id.
pub fn list_all(conn: &mut DbConn) -> Result<Vec<Match>> {
    let sql = "SELECT id, tournament_id, first_player_id, second_player_id, winner_id, date, round FROM matches ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list matches")?;

    Ok(rows)
}

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::params;

use super::connection::DbConn;
use crate::domain::Tournament;

pub fn insert_tournament(
    conn: &mut DbConn,
    name: &str,
    category: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    location: Option<&str>,
) -> Result<Tournament> {
    let sql = "INSERT INTO tournaments (name, category, start_date, end_date, location) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id, name, category, start_date, end_date, location";

    conn.query_row(
        sql,
        params![name, category, start_date, end_date, location],
        parse_tournament_row,
    )
    .context("Failed to insert new tournament")
}

fn parse_tournament_row(row: &rusqlite::Row) -> rusqlite::Result<Tournament> {
    Ok(Tournament {
        id: row.get(0)?,
        name: row.get(1)?,
        category: row.get(2)?,
        start_date: row.get(3)?,
        end_date: row.get(4)?,
        location: row.get(5)?,
    })
}

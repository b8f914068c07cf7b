use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::params;

use super::connection::DbConn;
use crate::domain::Player;

pub struct NewPlayer<'a> {
    pub full_name: &'a str,
    pub category: &'a str,
    pub birth_date: Option<NaiveDate>,
    pub club: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
}

impl<'a> NewPlayer<'a> {
    pub fn new(full_name: &'a str, category: &'a str) -> Self {
        Self {
            full_name,
            category,
            birth_date: None,
            club: None,
            email: None,
            phone: None,
        }
    }
}

pub fn insert_player(conn: &mut DbConn, player: &NewPlayer) -> Result<Player> {
    let sql = "INSERT INTO players (full_name, category, birth_date, club, email, phone) VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING id, full_name, category, birth_date, club, email, phone";

    conn.query_row(
        sql,
        params![
            player.full_name,
            player.category,
            player.birth_date,
            player.club,
            player.email,
            player.phone
        ],
        parse_player_row,
    )
    .context("Failed to insert new player")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    let category: Option<String> = row.get(2)?;

    Ok(Player {
        id: row.get(0)?,
        full_name: row.get(1)?,
        category: category.unwrap_or_default(),
        birth_date: row.get(3)?,
        club: row.get(4)?,
        email: row.get(5)?,
        phone: row.get(6)?,
    })
}

/// All players, ordered by id.
pub fn list_all(conn: &mut DbConn) -> Result<Vec<Player>> {
    let sql = "SELECT id, full_name, category, birth_date, club, email, phone FROM players ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list players")?;

    Ok(rows)
}

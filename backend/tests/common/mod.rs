use chrono::NaiveDate;
use tempfile::TempDir;

use tournament_ranking::database::matches::{NewMatch, insert_match};
use tournament_ranking::database::players::{NewPlayer, insert_player};
use tournament_ranking::database::tournaments::insert_tournament;
use tournament_ranking::database::{self, DbPool};
use tournament_ranking::domain::{Player, Tournament};

pub struct TestDb {
    pub pool: DbPool,
    pub path: String,
    _dir: TempDir,
}

impl TestDb {
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tournaments.db").to_str().unwrap().to_string();
        let pool = database::open(&path).unwrap();
        Self {
            pool,
            path,
            _dir: dir,
        }
    }

    /// Four players in categories A and B, two tournaments with six matches.
    pub fn with_reference_data() -> Self {
        let db = Self::empty();

        let juan = db.add_player("Juan Pérez", "A");
        let carlos = db.add_player("Carlos López", "A");
        let pedro = db.add_player("Pedro Gómez", "B");
        let luis = db.add_player("Luis Fernández", "A");

        let open = db.add_tournament("Abierto-Feb-2025", "A", "2025-02-10", "2025-02-15");
        let masters = db.add_tournament("Masters-Mar-2025", "B", "2025-03-05", "2025-03-10");

        db.add_match(open.id, juan.id, carlos.id, juan.id, "2025-02-10", Some("Cuartos"));
        db.add_match(open.id, juan.id, luis.id, luis.id, "2025-02-12", Some("Semifinal"));
        db.add_match(open.id, luis.id, juan.id, juan.id, "2025-02-15", Some("Final"));
        db.add_match(masters.id, pedro.id, juan.id, pedro.id, "2025-03-05", Some("Cuartos"));
        db.add_match(masters.id, pedro.id, carlos.id, pedro.id, "2025-03-07", Some("Semifinal"));
        db.add_match(masters.id, pedro.id, luis.id, luis.id, "2025-03-10", Some("Final"));

        db
    }

    pub fn add_player(&self, name: &str, category: &str) -> Player {
        let mut conn = database::get_connection(&self.pool).unwrap();
        insert_player(&mut conn, &NewPlayer::new(name, category)).unwrap()
    }

    pub fn add_tournament(&self, name: &str, category: &str, start: &str, end: &str) -> Tournament {
        let mut conn = database::get_connection(&self.pool).unwrap();
        insert_tournament(&mut conn, name, category, date(start), date(end), None).unwrap()
    }

    pub fn add_match(
        &self,
        tournament_id: i64,
        first_player_id: i64,
        second_player_id: i64,
        winner_id: i64,
        day: &str,
        round: Option<&str>,
    ) {
        let mut conn = database::get_connection(&self.pool).unwrap();
        let new_match = NewMatch {
            tournament_id,
            first_player_id,
            second_player_id,
            winner_id,
            date: date(day),
            round,
        };
        insert_match(&mut conn, &new_match).unwrap();
    }
}

pub fn date(day: &str) -> NaiveDate {
    NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap()
}

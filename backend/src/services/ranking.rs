use anyhow::Result;
use log::info;

use crate::config::RankingSettings;
use crate::database::{self, DbPool};
use crate::ranking::{self, Ranking};

/// Reads the current players and matches from the pool and ranks them.
pub struct RankingService {
    pool: DbPool,
    settings: RankingSettings,
}

impl RankingService {
    pub fn new(pool: DbPool, settings: RankingSettings) -> Self {
        Self { pool, settings }
    }

    pub fn compute(&self) -> Result<Ranking> {
        let mut conn = database::get_connection(&self.pool)?;

        let players = database::players::list_all(&mut conn)?;
        let matches = database::matches::list_all(&mut conn)?;
        info!("Loaded {} players and {} matches", players.len(), matches.len());

        let ranking = ranking::build_ranking(&players, &matches, &self.settings)?;
        info!("Ranked {} categories", ranking.len());

        Ok(ranking)
    }
}

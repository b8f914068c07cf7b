pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod presenter;
pub mod ranking;
pub mod services;

use anyhow::{Result, bail};
use clap::Parser;
use cli::Cli;
use log::info;

use crate::api::models::RankingResponse;
use crate::config::AppConfig;
use crate::ranking::Ranking;
use crate::services::ranking::RankingService;
use crate::services::server::ServerService;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle_rank(config: AppConfig, json: bool, category: Option<&str>) -> Result<()> {
    let pool = database::open(&config.database.path)?;
    let service = RankingService::new(pool, config.ranking);
    let ranking = select_category(service.compute()?, category)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&RankingResponse::from(ranking))?);
    } else if ranking.is_empty() {
        info!("No matches recorded, nothing to rank");
    } else {
        print!("{}", presenter::render_text(&ranking));
    }

    Ok(())
}

pub fn handle_serve(config: AppConfig, port: u16) -> Result<()> {
    let pool = database::open(&config.database.path)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, pool, config);
        service.run().await
    })
}

fn select_category(mut ranking: Ranking, category: Option<&str>) -> Result<Ranking> {
    let Some(category) = category else {
        return Ok(ranking);
    };

    match ranking.remove_entry(category) {
        Some((label, rows)) => Ok(Ranking::from([(label, rows)])),
        None => bail!("No ranked players in category {}", category),
    }
}

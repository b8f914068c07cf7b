use anyhow::Result;

use tournament_ranking::cli::{Cli, Command};
use tournament_ranking::config::AppConfig;
use tournament_ranking::{handle_rank, handle_serve, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(cli)
}

fn execute_command(cli: Cli) -> Result<()> {
    let config = AppConfig::new().with_database_path(cli.database.as_deref());

    match cli.command {
        Command::Rank { json, category } => handle_rank(config, json, category.as_deref()),
        Command::Serve { port } => handle_serve(config, port),
    }
}

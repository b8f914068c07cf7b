use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Per-category tournament ranking")]
pub struct Cli {
    /// SQLite database file (defaults to $DATABASE_PATH or tournaments.db)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Print the ranking table of every category
    Rank {
        /// Print JSON instead of text tables
        #[arg(long)]
        json: bool,
        /// Only print this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Serve the ranking over HTTP
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
}

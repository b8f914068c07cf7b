#[derive(Debug, Clone)]
pub struct RankingSettings {
    pub participation_points: u32,
    pub win_points: u32,
    pub final_win_points: u32,
    pub final_round_label: String,
    pub min_table_rows: usize,
    pub placeholder_name: String,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            participation_points: 10,
            win_points: 100,
            final_win_points: 200,
            final_round_label: "Final".to_string(),
            min_table_rows: 5,
            placeholder_name: "Jugador Extra".to_string(),
        }
    }
}

const DEFAULT_DATABASE_PATH: &str = "tournaments.db";

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub ranking: RankingSettings,
    pub database: DatabaseSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            ranking: RankingSettings::default(),
            database: DatabaseSettings::default(),
        }
    }

    /// Command line flag wins over `DATABASE_PATH`.
    pub fn with_database_path(mut self, path: Option<&str>) -> Self {
        if let Some(path) = path {
            self.database.path = path.to_string();
        }
        self
    }
}

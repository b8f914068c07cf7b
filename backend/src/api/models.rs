use serde::Serialize;

use crate::ranking::{Ranking, RankingRow};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTable {
    pub category: String,
    pub rows: Vec<RankingRow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    pub categories: Vec<CategoryTable>,
}

impl From<Ranking> for RankingResponse {
    fn from(ranking: Ranking) -> Self {
        let categories = ranking
            .into_iter()
            .map(|(category, rows)| CategoryTable { category, rows })
            .collect();

        Self { categories }
    }
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::{error, warn};
use std::sync::Arc;

use crate::api::models::{CategoryTable, RankingResponse};
use crate::config::AppConfig;
use crate::database::DbPool;
use crate::errors::RankingError;
use crate::ranking::Ranking;
use crate::services::ranking::RankingService;

pub struct AppState {
    pub pool: DbPool,
    pub config: AppConfig,
}

pub async fn get_ranking(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match compute_ranking(&state) {
        Ok(ranking) => Json(RankingResponse::from(ranking)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_category_ranking(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> impl IntoResponse {
    let mut ranking = match compute_ranking(&state) {
        Ok(ranking) => ranking,
        Err(e) => return error_response(e),
    };

    match ranking.remove(&category) {
        Some(rows) => Json(CategoryTable { category, rows }).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            format!("No ranked players in category {}", category),
        )
            .into_response(),
    }
}

fn compute_ranking(state: &AppState) -> anyhow::Result<Ranking> {
    RankingService::new(state.pool.clone(), state.config.ranking.clone()).compute()
}

fn error_response(e: anyhow::Error) -> Response {
    if let Some(invalid) = e.downcast_ref::<RankingError>() {
        warn!("Rejected match data: {}", invalid);
        return (StatusCode::UNPROCESSABLE_ENTITY, invalid.to_string()).into_response();
    }

    error!("Failed to compute ranking: {:?}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e)).into_response()
}

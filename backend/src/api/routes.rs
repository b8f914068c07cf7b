use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{get_category_ranking, get_ranking, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/ranking", get(get_ranking))
        .route("/api/ranking/:category", get(get_category_ranking))
        .with_state(state)
}

use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::AppConfig;
use crate::database::DbPool;

pub struct ServerService {
    port: u16,
    pool: DbPool,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, pool: DbPool, config: AppConfig) -> Self {
        Self { port, pool, config }
    }

    pub async fn run(&self) -> Result<()> {
        let state = Arc::new(AppState {
            pool: self.pool.clone(),
            config: self.config.clone(),
        });

        let app = create_router(state).layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

pub mod extract;
pub mod health;
pub mod margin;
pub mod network;
pub mod portfolio;
pub mod workers;

pub use extract::ApiJson;

use crate::config::Config;
use crate::engine::AnalyticsPolicy;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn policy(&self) -> &AnalyticsPolicy {
        &self.config.policy
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/portfolio/analyze", post(portfolio::analyze))
        .route("/v1/network/health", post(network::network_health))
        .route("/v1/workers/efficiency", post(workers::efficiency))
        .route("/v1/margin/risk", post(margin::margin_risk))
        .layer(cors)
        .with_state(state)
}

//! Kumo - Ichimoku, MACD and trend dashboard for daily crypto prices

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod types;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use services::{DashboardService, SignalScorer};
use sources::PriceProvider;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub provider: Arc<dyn PriceProvider>,
    pub dashboard: Arc<DashboardService>,
}

impl AppState {
    pub fn new(config: Config, provider: Arc<dyn PriceProvider>) -> Self {
        let dashboard = DashboardService::new(
            SignalScorer::new(config.reference_price),
            config.dashboard.clone(),
        );

        Self {
            config: Arc::new(config),
            provider,
            dashboard: Arc::new(dashboard),
        }
    }
}

/// Build the HTTP application.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Re-export commonly used types
pub use services::compute_indicators;
pub use types::*;

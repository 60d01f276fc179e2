//! Liveness endpoint reporting the dashboard defaults in effect.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ServiceStatus {
    status: &'static str,
    version: &'static str,
    reference_price: f64,
    default_tickers: String,
    default_period: String,
}

async fn status(State(state): State<AppState>) -> Json<ServiceStatus> {
    let config = &state.config;
    Json(ServiceStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        reference_price: config.reference_price,
        default_tickers: config.dashboard.tickers.clone(),
        default_period: config.dashboard.period.clone(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/health", get(status))
}

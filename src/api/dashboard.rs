//! Dashboard and per-ticker indicator endpoints.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Form, Json, Router,
};
use serde::Serialize;

use crate::error::Result;
use crate::types::{DashboardQuery, DashboardResponse, PeriodQuery, TickerAnalysis};
use crate::AppState;

/// API response wrapper.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub meta: ApiMeta,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMeta {
    pub generated_at: i64,
}

impl<T> ApiResponse<T> {
    fn new(data: T) -> Self {
        Self {
            data,
            meta: ApiMeta {
                generated_at: chrono::Utc::now().timestamp_millis(),
            },
        }
    }
}

/// Create the dashboard router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/dashboard", get(get_dashboard).post(post_dashboard))
        .route("/api/indicators/:ticker", get(get_ticker_indicators))
}

async fn build(state: &AppState, query: DashboardQuery) -> Result<Json<ApiResponse<DashboardResponse>>> {
    let response = state
        .dashboard
        .build(state.provider.as_ref(), &query)
        .await?;
    Ok(Json(ApiResponse::new(response)))
}

/// Build the dashboard from query parameters.
async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<ApiResponse<DashboardResponse>>> {
    build(&state, query).await
}

/// Build the dashboard from a submitted form.
async fn post_dashboard(
    State(state): State<AppState>,
    Form(query): Form<DashboardQuery>,
) -> Result<Json<ApiResponse<DashboardResponse>>> {
    build(&state, query).await
}

/// Indicators and score for one ticker.
async fn get_ticker_indicators(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<ApiResponse<TickerAnalysis>>> {
    let analysis = state
        .dashboard
        .analyze_ticker(state.provider.as_ref(), &ticker, query.period.as_deref())
        .await?;
    Ok(Json(ApiResponse::new(analysis)))
}

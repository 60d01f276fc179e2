use serde::{Deserialize, Serialize};

use super::{Figure, IndicatorSet, SignalScore};

/// Dashboard request parameters, from the query string or a form body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    /// Comma-separated tickers, e.g. `BTC-USD,ETH-USD`.
    pub tickers: Option<String>,
    /// Lookback period, e.g. `1y`.
    pub period: Option<String>,
    /// Color for shapes drawn on the chart.
    pub line_color: Option<String>,
}

/// Query parameters for the single-ticker endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PeriodQuery {
    pub period: Option<String>,
}

/// Indicators and score for one ticker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerAnalysis {
    pub symbol: String,
    pub close: Vec<f64>,
    pub indicators: IndicatorSet,
    /// `None` when the series has no closes.
    pub score: Option<SignalScore>,
}

/// A requested ticker that produced no analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedTicker {
    pub symbol: String,
    pub reason: String,
}

/// Full dashboard payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub title: String,
    pub period: String,
    pub tickers: Vec<TickerAnalysis>,
    pub skipped: Vec<SkippedTicker>,
    pub figure: Figure,
}

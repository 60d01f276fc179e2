use serde::{Deserialize, Serialize};

/// The indicator families computed for every ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Ichimoku,
    Macd,
    Trend,
}

impl IndicatorKind {
    /// Get display name for this indicator.
    pub fn name(&self) -> &'static str {
        match self {
            IndicatorKind::Ichimoku => "Ichimoku Cloud",
            IndicatorKind::Macd => "MACD",
            IndicatorKind::Trend => "Trend Line",
        }
    }
}

/// Why an indicator was left undefined for a ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// Fewer points than the indicator's shortest window.
    InsufficientHistory { required: usize, available: usize },
    /// A price column the indicator depends on is absent.
    MissingField { field: String },
}

/// An indicator that could not be computed, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedIndicator {
    pub indicator: IndicatorKind,
    pub reason: SkipReason,
}

/// Ichimoku Cloud lines, index-aligned with the input series.
///
/// `None` marks positions without enough history or shifted past an edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IchimokuLines {
    pub tenkan_sen: Vec<Option<f64>>,
    pub kijun_sen: Vec<Option<f64>>,
    pub senkou_span_a: Vec<Option<f64>>,
    pub senkou_span_b: Vec<Option<f64>>,
    pub chikou_span: Vec<Option<f64>>,
}

/// MACD lines, fully defined from the first point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacdLines {
    pub ema_fast: Vec<f64>,
    pub ema_slow: Vec<f64>,
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// Least-squares line through the closes against their index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
    pub values: Vec<f64>,
}

impl TrendLine {
    /// Value of the fitted line at index `t`.
    pub fn at(&self, t: usize) -> f64 {
        self.slope * t as f64 + self.intercept
    }
}

/// A single flagged local extremum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extremum {
    pub index: usize,
    pub time: i64,
    pub price: f64,
}

/// Every derived series for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSet {
    pub time: Vec<i64>,
    pub ichimoku: Option<IchimokuLines>,
    pub macd: Option<MacdLines>,
    pub trend: Option<TrendLine>,
    pub local_maxima: Vec<Extremum>,
    pub local_minima: Vec<Extremum>,
    pub skipped: Vec<SkippedIndicator>,
}

impl IndicatorSet {
    /// Whether the given indicator was skipped.
    pub fn is_skipped(&self, kind: IndicatorKind) -> bool {
        self.skipped.iter().any(|s| s.indicator == kind)
    }
}

/// Buy-signal strength derived from the latest close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalScore {
    pub value: f64,
    pub color: String,
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lookback period accepted by the price provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ChartPeriod {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "5d")]
    FiveDays,
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[serde(rename = "6mo")]
    SixMonths,
    #[default]
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "2y")]
    TwoYears,
    #[serde(rename = "5y")]
    FiveYears,
    #[serde(rename = "10y")]
    TenYears,
    #[serde(rename = "ytd")]
    YearToDate,
    #[serde(rename = "max")]
    Max,
}

impl ChartPeriod {
    /// Get the period from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "1d" => Some(ChartPeriod::OneDay),
            "5d" => Some(ChartPeriod::FiveDays),
            "1mo" => Some(ChartPeriod::OneMonth),
            "3mo" => Some(ChartPeriod::ThreeMonths),
            "6mo" => Some(ChartPeriod::SixMonths),
            "1y" => Some(ChartPeriod::OneYear),
            "2y" => Some(ChartPeriod::TwoYears),
            "5y" => Some(ChartPeriod::FiveYears),
            "10y" => Some(ChartPeriod::TenYears),
            "ytd" => Some(ChartPeriod::YearToDate),
            "max" => Some(ChartPeriod::Max),
            _ => None,
        }
    }

    /// Range parameter understood by the chart API.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartPeriod::OneDay => "1d",
            ChartPeriod::FiveDays => "5d",
            ChartPeriod::OneMonth => "1mo",
            ChartPeriod::ThreeMonths => "3mo",
            ChartPeriod::SixMonths => "6mo",
            ChartPeriod::OneYear => "1y",
            ChartPeriod::TwoYears => "2y",
            ChartPeriod::FiveYears => "5y",
            ChartPeriod::TenYears => "10y",
            ChartPeriod::YearToDate => "ytd",
            ChartPeriod::Max => "max",
        }
    }
}

impl std::fmt::Display for ChartPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// OHLC (Open, High, Low, Close) data point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OhlcPoint {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

/// Reasons a set of columns cannot form a [`PriceSeries`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    #[error("{field} has {actual} values, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("timestamp at index {index} does not increase")]
    NonIncreasingTime { index: usize },

    #[error("{field} at index {index} is not a finite number")]
    NonFinite { field: &'static str, index: usize },
}

/// Daily price history for one ticker, stored column-wise.
///
/// Timestamps are milliseconds since the epoch and strictly increasing.
/// Close is always present; open, high and low are present or absent as
/// whole columns.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSeries {
    symbol: String,
    time: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    open: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    high: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    low: Option<Vec<f64>>,
    close: Vec<f64>,
}

impl PriceSeries {
    /// Build a series from columns, validating alignment and ordering.
    pub fn new(
        symbol: impl Into<String>,
        time: Vec<i64>,
        open: Option<Vec<f64>>,
        high: Option<Vec<f64>>,
        low: Option<Vec<f64>>,
        close: Vec<f64>,
    ) -> Result<Self, SeriesError> {
        let expected = time.len();

        check_column("close", &close, expected)?;
        if let Some(ref open) = open {
            check_column("open", open, expected)?;
        }
        if let Some(ref high) = high {
            check_column("high", high, expected)?;
        }
        if let Some(ref low) = low {
            check_column("low", low, expected)?;
        }

        if let Some(index) = time.windows(2).position(|w| w[1] <= w[0]) {
            return Err(SeriesError::NonIncreasingTime { index: index + 1 });
        }

        Ok(Self {
            symbol: symbol.into(),
            time,
            open,
            high,
            low,
            close,
        })
    }

    /// Build a series carrying only closing prices.
    pub fn close_only(
        symbol: impl Into<String>,
        time: Vec<i64>,
        close: Vec<f64>,
    ) -> Result<Self, SeriesError> {
        Self::new(symbol, time, None, None, None, close)
    }

    /// Build a full OHLC series from candles.
    pub fn from_candles(symbol: impl Into<String>, candles: &[OhlcPoint]) -> Result<Self, SeriesError> {
        Self::new(
            symbol,
            candles.iter().map(|c| c.time).collect(),
            Some(candles.iter().map(|c| c.open).collect()),
            Some(candles.iter().map(|c| c.high).collect()),
            Some(candles.iter().map(|c| c.low).collect()),
            candles.iter().map(|c| c.close).collect(),
        )
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn time(&self) -> &[i64] {
        &self.time
    }

    pub fn open(&self) -> Option<&[f64]> {
        self.open.as_deref()
    }

    pub fn high(&self) -> Option<&[f64]> {
        self.high.as_deref()
    }

    pub fn low(&self) -> Option<&[f64]> {
        self.low.as_deref()
    }

    pub fn close(&self) -> &[f64] {
        &self.close
    }

    /// Number of trading days in the series.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Most recent closing price.
    pub fn latest_close(&self) -> Option<f64> {
        self.close.last().copied()
    }
}

fn check_column(field: &'static str, values: &[f64], expected: usize) -> Result<(), SeriesError> {
    if values.len() != expected {
        return Err(SeriesError::LengthMismatch {
            field,
            expected,
            actual: values.len(),
        });
    }
    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(SeriesError::NonFinite { field, index });
    }
    Ok(())
}

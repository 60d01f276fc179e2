use std::env;
use std::time::Duration;

use crate::services::scoring::DEFAULT_REFERENCE_PRICE;

/// Defaults applied when a dashboard request leaves a field empty.
#[derive(Debug, Clone)]
pub struct DashboardDefaults {
    /// Comma-separated tickers shown when none are requested.
    pub tickers: String,
    /// Lookback period string (e.g. "1y").
    pub period: String,
    /// Color of user-drawn shapes.
    pub line_color: String,
}

impl Default for DashboardDefaults {
    fn default() -> Self {
        Self {
            tickers: "BTC-USD".to_string(),
            period: "1y".to_string(),
            line_color: "#0000ff".to_string(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Price that maps to a 100% buy-signal strength.
    pub reference_price: f64,
    /// Base URL of the Yahoo Finance chart API.
    pub yahoo_base_url: String,
    /// Timeout for each price fetch.
    pub fetch_timeout: Duration,
    /// Request defaults.
    pub dashboard: DashboardDefaults,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Missing or unparsable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DashboardDefaults::default();

        let reference_price = lookup("REFERENCE_PRICE")
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(DEFAULT_REFERENCE_PRICE);

        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            reference_price,
            yahoo_base_url: lookup("YAHOO_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| "https://query1.finance.yahoo.com".to_string()),
            fetch_timeout: Duration::from_secs(
                lookup("FETCH_TIMEOUT_SECS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
            ),
            dashboard: DashboardDefaults {
                tickers: lookup("DEFAULT_TICKERS").unwrap_or(defaults.tickers),
                period: lookup("DEFAULT_PERIOD").unwrap_or(defaults.period),
                line_color: lookup("DEFAULT_LINE_COLOR").unwrap_or(defaults.line_color),
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

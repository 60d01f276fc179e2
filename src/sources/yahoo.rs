//! Yahoo Finance API client for daily price history.
//!
//! Uses the unofficial chart endpoint, which needs no API key.

use futures_util::future::{join_all, BoxFuture, FutureExt};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use super::PriceProvider;
use crate::error::{AppError, Result};
use crate::types::{ChartPeriod, PriceSeries, Ticker};

/// Yahoo Finance chart response.
#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChart,
}

#[derive(Debug, Deserialize)]
struct YahooChart {
    result: Option<Vec<YahooResult>>,
    error: Option<YahooError>,
}

#[derive(Debug, Deserialize)]
struct YahooError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct YahooResult {
    timestamp: Option<Vec<i64>>,
    indicators: YahooIndicators,
}

#[derive(Debug, Deserialize)]
struct YahooIndicators {
    quote: Vec<YahooQuote>,
}

#[derive(Debug, Deserialize)]
struct YahooQuote {
    open: Option<Vec<Option<f64>>>,
    high: Option<Vec<Option<f64>>>,
    low: Option<Vec<Option<f64>>>,
    close: Option<Vec<Option<f64>>>,
}

/// Turn a chart response into a validated series.
///
/// Rows missing any present column are dropped, as are rows whose timestamp
/// does not advance. When the high or low column is absent altogether the
/// series carries closes only.
fn parse_chart(symbol: &str, response: YahooChartResponse) -> Result<PriceSeries> {
    if let Some(error) = response.chart.error {
        return Err(AppError::ExternalApi(format!(
            "Yahoo API error: {} - {}",
            error.code, error.description
        )));
    }

    let result = response
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| AppError::ExternalApi("Empty results array".to_string()))?;

    let timestamps = result
        .timestamp
        .ok_or_else(|| AppError::ExternalApi("No timestamps in response".to_string()))?;

    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| AppError::ExternalApi("No quote data in response".to_string()))?;

    let closes = quote
        .close
        .ok_or_else(|| AppError::ExternalApi("No close prices in response".to_string()))?;
    let opens = quote.open;
    let (highs, lows) = match (quote.high, quote.low) {
        (Some(h), Some(l)) => (Some(h), Some(l)),
        _ => (None, None),
    };

    let mut time = Vec::with_capacity(timestamps.len());
    let mut open = opens.as_ref().map(|_| Vec::with_capacity(timestamps.len()));
    let mut high = highs.as_ref().map(|_| Vec::with_capacity(timestamps.len()));
    let mut low = lows.as_ref().map(|_| Vec::with_capacity(timestamps.len()));
    let mut close = Vec::with_capacity(timestamps.len());

    let cell = |column: &Option<Vec<Option<f64>>>, i: usize| -> Option<Option<f64>> {
        column.as_ref().map(|values| values.get(i).copied().flatten())
    };

    let mut dropped = 0usize;
    for (i, &timestamp) in timestamps.iter().enumerate() {
        let time_ms = timestamp * 1000;
        let c = closes.get(i).copied().flatten();
        let (o, h, l) = (cell(&opens, i), cell(&highs, i), cell(&lows, i));

        let advances = time.last().map_or(true, |&last| time_ms > last);
        let complete = c.is_some()
            && o.map_or(true, |v| v.is_some())
            && h.map_or(true, |v| v.is_some())
            && l.map_or(true, |v| v.is_some());

        if !(complete && advances) {
            dropped += 1;
            continue;
        }

        time.push(time_ms);
        close.extend(c);
        if let (Some(col), Some(v)) = (open.as_mut(), o.flatten()) {
            col.push(v);
        }
        if let (Some(col), Some(v)) = (high.as_mut(), h.flatten()) {
            col.push(v);
        }
        if let (Some(col), Some(v)) = (low.as_mut(), l.flatten()) {
            col.push(v);
        }
    }

    if dropped > 0 {
        debug!("Dropped {} incomplete rows for {}", dropped, symbol);
    }

    Ok(PriceSeries::new(symbol, time, open, high, low, close)?)
}

/// Yahoo Finance API client.
pub struct YahooFinanceClient {
    client: Client,
    base_url: String,
}

impl YahooFinanceClient {
    /// Create a new Yahoo Finance client.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn chart_url(&self, ticker: &Ticker, period: ChartPeriod) -> String {
        format!(
            "{}/v8/finance/chart/{}?range={}&interval=1d&includePrePost=false",
            self.base_url,
            ticker.as_str(),
            period.as_str()
        )
    }

    /// Fetch daily history for a single ticker.
    pub async fn get_daily_history(&self, ticker: &Ticker, period: ChartPeriod) -> Result<PriceSeries> {
        let url = self.chart_url(ticker, period);
        debug!("Fetching Yahoo Finance data: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!("API error: {}", response.status())));
        }

        let data: YahooChartResponse = response.json().await?;
        parse_chart(ticker.as_str(), data)
    }
}

impl PriceProvider for YahooFinanceClient {
    fn fetch<'a>(
        &'a self,
        tickers: &'a [Ticker],
        period: ChartPeriod,
    ) -> BoxFuture<'a, Result<Vec<PriceSeries>>> {
        async move {
            let results =
                join_all(tickers.iter().map(|t| self.get_daily_history(t, period))).await;

            let mut series = Vec::with_capacity(tickers.len());
            for (ticker, result) in tickers.iter().zip(results) {
                match result {
                    Ok(s) if !s.is_empty() => series.push(s),
                    Ok(_) => warn!("No price data returned for {}", ticker),
                    Err(e) => warn!("Skipping {}: {}", ticker, e),
                }
            }

            if series.is_empty() {
                let requested: Vec<&str> = tickers.iter().map(Ticker::as_str).collect();
                return Err(AppError::DataUnavailable(requested.join(", ")));
            }

            Ok(series)
        }
        .boxed()
    }
}

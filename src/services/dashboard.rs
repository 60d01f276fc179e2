//! Request-level orchestration: validate, fetch, compute, present.

use tracing::{info, warn};

use super::indicators::IndicatorEngine;
use super::presentation::{build_figure, dashboard_title};
use super::scoring::SignalScorer;
use crate::config::DashboardDefaults;
use crate::error::{AppError, Result};
use crate::sources::PriceProvider;
use crate::types::{
    ChartPeriod, DashboardQuery, DashboardResponse, PriceSeries, SkippedTicker, Ticker,
    TickerAnalysis, TickerList,
};

/// Builds dashboards from a price provider.
#[derive(Debug, Clone)]
pub struct DashboardService {
    engine: IndicatorEngine,
    scorer: SignalScorer,
    defaults: DashboardDefaults,
}

impl DashboardService {
    pub fn new(scorer: SignalScorer, defaults: DashboardDefaults) -> Self {
        Self {
            engine: IndicatorEngine::default(),
            scorer,
            defaults,
        }
    }

    /// Compute indicators and score for one series.
    pub fn analyze(&self, series: &PriceSeries) -> TickerAnalysis {
        TickerAnalysis {
            symbol: series.symbol().to_string(),
            close: series.close().to_vec(),
            indicators: self.engine.compute(series),
            score: series.latest_close().map(|c| self.scorer.score(c)),
        }
    }

    fn parse_period(&self, raw: Option<&str>) -> Result<ChartPeriod> {
        let raw = non_empty(raw).unwrap_or(self.defaults.period.as_str());
        ChartPeriod::from_str(raw).ok_or_else(|| AppError::InvalidPeriod(raw.to_string()))
    }

    /// Build the dashboard for a request.
    ///
    /// Invalid tickers and tickers without data are reported in `skipped`;
    /// the request only fails when no ticker is valid or none returned data.
    pub async fn build(
        &self,
        provider: &dyn PriceProvider,
        query: &DashboardQuery,
    ) -> Result<DashboardResponse> {
        let raw_tickers = non_empty(query.tickers.as_deref()).unwrap_or(self.defaults.tickers.as_str());
        let line_color = non_empty(query.line_color.as_deref()).unwrap_or(self.defaults.line_color.as_str());

        let list = TickerList::parse(raw_tickers);
        if list.valid.is_empty() {
            return Err(AppError::NoValidTickers);
        }
        let period = self.parse_period(query.period.as_deref())?;

        let mut skipped: Vec<SkippedTicker> = list
            .rejected
            .iter()
            .map(|symbol| SkippedTicker {
                symbol: symbol.clone(),
                reason: "invalid ticker".to_string(),
            })
            .collect();

        let series = provider.fetch(&list.valid, period).await?;

        for ticker in &list.valid {
            if !series.iter().any(|s| s.symbol() == ticker.as_str()) {
                warn!("No usable data for {}", ticker);
                skipped.push(SkippedTicker {
                    symbol: ticker.to_string(),
                    reason: "data unavailable".to_string(),
                });
            }
        }

        let tickers: Vec<TickerAnalysis> = series.iter().map(|s| self.analyze(s)).collect();

        let title = dashboard_title(list.requested());
        let figure = build_figure(&tickers, &title, line_color);

        info!(
            "Built dashboard for {} tickers ({} skipped, period {})",
            tickers.len(),
            skipped.len(),
            period
        );

        Ok(DashboardResponse {
            title,
            period: period.to_string(),
            tickers,
            skipped,
            figure,
        })
    }

    /// Analyze a single ticker.
    pub async fn analyze_ticker(
        &self,
        provider: &dyn PriceProvider,
        symbol: &str,
        period: Option<&str>,
    ) -> Result<TickerAnalysis> {
        let ticker =
            Ticker::parse(symbol).ok_or_else(|| AppError::InvalidTicker(symbol.to_string()))?;
        let period = self.parse_period(period)?;

        let series = provider.fetch(std::slice::from_ref(&ticker), period).await?;
        let series = series
            .into_iter()
            .find(|s| s.symbol() == ticker.as_str())
            .ok_or_else(|| AppError::DataUnavailable(ticker.to_string()))?;

        Ok(self.analyze(&series))
    }
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new(SignalScorer::default(), DashboardDefaults::default())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::future::{BoxFuture, FutureExt};

    /// Serves a rising close-only series for every ticker except `missing`.
    struct StaticProvider {
        missing: Vec<&'static str>,
    }

    impl PriceProvider for StaticProvider {
        fn fetch<'a>(
            &'a self,
            tickers: &'a [Ticker],
            _period: ChartPeriod,
        ) -> BoxFuture<'a, Result<Vec<PriceSeries>>> {
            async move {
                let series: Vec<PriceSeries> = tickers
                    .iter()
                    .filter(|t| !self.missing.iter().any(|m| *m == t.as_str()))
                    .map(|t| {
                        let time = (0..30).map(|i| i * 86_400_000).collect();
                        let close = (0..30).map(|i| 100.0 + i as f64).collect();
                        PriceSeries::close_only(t.as_str(), time, close).unwrap()
                    })
                    .collect();
                if series.is_empty() {
                    return Err(AppError::DataUnavailable("all".to_string()));
                }
                Ok(series)
            }
            .boxed()
        }
    }

    fn query(tickers: &str) -> DashboardQuery {
        DashboardQuery {
            tickers: Some(tickers.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_uses_defaults() {
        let service = DashboardService::default();
        let provider = StaticProvider { missing: vec![] };
        let response =
            tokio_test::block_on(service.build(&provider, &DashboardQuery::default())).unwrap();

        assert_eq!(response.title, "Financial Dashboard for BTC-USD");
        assert_eq!(response.period, "1y");
        assert_eq!(response.tickers.len(), 1);
        assert_eq!(response.figure.layout.newshape.line.color, "#0000ff");
    }

    #[test]
    fn test_build_reports_rejected_and_missing() {
        let service = DashboardService::default();
        let provider = StaticProvider {
            missing: vec!["ETH-USD"],
        };
        let response = tokio_test::block_on(
            service.build(&provider, &query("BTC-USD,eth,ETH-USD")),
        )
        .unwrap();

        assert_eq!(response.title, "Financial Dashboard for Multiple Assets");
        assert_eq!(response.tickers.len(), 1);
        assert_eq!(
            response.skipped,
            vec![
                SkippedTicker {
                    symbol: "eth".to_string(),
                    reason: "invalid ticker".to_string()
                },
                SkippedTicker {
                    symbol: "ETH-USD".to_string(),
                    reason: "data unavailable".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_build_title_counts_repeated_entries() {
        let service = DashboardService::default();
        let provider = StaticProvider { missing: vec![] };
        let response =
            tokio_test::block_on(service.build(&provider, &query("SOL-USD, SOL-USD"))).unwrap();

        assert_eq!(response.title, "Financial Dashboard for Multiple Assets");
        assert_eq!(response.tickers.len(), 1);
    }

    #[test]
    fn test_analyze_zero_latest_close_is_neutral() {
        let service = DashboardService::default();
        let series = PriceSeries::close_only("BTC-USD", vec![1, 2, 3], vec![5.0, 4.0, 0.0]).unwrap();
        let score = service.analyze(&series).score.unwrap();

        assert_eq!(score.value, 0.0);
        assert_eq!(score.color, crate::services::scoring::NEUTRAL_COLOR);
    }

    #[test]
    fn test_build_without_valid_tickers() {
        let service = DashboardService::default();
        let provider = StaticProvider { missing: vec![] };
        let err = tokio_test::block_on(service.build(&provider, &query("btc,DOGE"))).unwrap_err();
        assert!(matches!(err, AppError::NoValidTickers));
    }

    #[test]
    fn test_build_invalid_period() {
        let service = DashboardService::default();
        let provider = StaticProvider { missing: vec![] };
        let q = DashboardQuery {
            period: Some("3w".to_string()),
            ..Default::default()
        };
        let err = tokio_test::block_on(service.build(&provider, &q)).unwrap_err();
        assert!(matches!(err, AppError::InvalidPeriod(ref p) if p == "3w"));
    }

    #[test]
    fn test_analyze_ticker_rejects_bad_symbol() {
        let service = DashboardService::default();
        let provider = StaticProvider { missing: vec![] };
        let err =
            tokio_test::block_on(service.analyze_ticker(&provider, "btc-usd", None)).unwrap_err();
        assert!(matches!(err, AppError::InvalidTicker(_)));
    }

    #[test]
    fn test_analyze_close_only_series() {
        let service = DashboardService::default();
        let provider = StaticProvider { missing: vec![] };
        let analysis =
            tokio_test::block_on(service.analyze_ticker(&provider, "SOL-USD", Some("3mo")))
                .unwrap();

        assert_eq!(analysis.symbol, "SOL-USD");
        assert!(analysis.indicators.ichimoku.is_none());
        assert!(analysis.indicators.macd.is_some());
        let score = analysis.score.unwrap();
        assert!((score.value - 0.129).abs() < 1e-12);
    }
}

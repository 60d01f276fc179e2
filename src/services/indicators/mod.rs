//! Technical indicator implementations.
//!
//! Everything here is a pure function of its input: no I/O, no shared
//! state, and undefined positions are reported as `None` rather than zero.

pub mod ema;
pub mod extrema;
pub mod ichimoku;
pub mod macd;
pub mod rolling;
pub mod trend;

pub use ema::Ema;
pub use extrema::{local_extrema, LocalExtrema};
pub use ichimoku::Ichimoku;
pub use macd::Macd;
pub use trend::linear_fit;

use crate::types::{IndicatorKind, IndicatorSet, PriceSeries, SkipReason, SkippedIndicator, TrendLine};

/// Fewest points any indicator is computed for.
pub const MIN_POINTS: usize = 2;

/// Indicator parameters used for every ticker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndicatorEngine {
    pub ichimoku: Ichimoku,
    pub macd: Macd,
}

impl IndicatorEngine {
    /// Compute every indicator for one series.
    ///
    /// Each indicator fails on its own: a missing high/low column skips the
    /// Ichimoku lines while MACD, trend and extrema still run on the close.
    pub fn compute(&self, series: &PriceSeries) -> IndicatorSet {
        let close = series.close();
        let available = close.len();
        let mut skipped = Vec::new();

        let ichimoku = match (series.high(), series.low()) {
            (Some(high), Some(low)) => {
                let required = self.ichimoku.min_periods().max(MIN_POINTS);
                if available < required {
                    skipped.push(insufficient(IndicatorKind::Ichimoku, required, available));
                    None
                } else {
                    self.ichimoku.calculate(high, low, close)
                }
            }
            (high, _) => {
                let field = if high.is_none() { "high" } else { "low" };
                skipped.push(SkippedIndicator {
                    indicator: IndicatorKind::Ichimoku,
                    reason: SkipReason::MissingField {
                        field: field.to_string(),
                    },
                });
                None
            }
        };

        let macd = self.macd.calculate(close);
        if macd.is_none() {
            skipped.push(insufficient(IndicatorKind::Macd, self.macd.min_periods(), available));
        }

        let trend = TrendLine::fit(close);
        if trend.is_none() {
            skipped.push(insufficient(IndicatorKind::Trend, MIN_POINTS, available));
        }

        let LocalExtrema { maxima, minima } = local_extrema(series.time(), close);

        IndicatorSet {
            time: series.time().to_vec(),
            ichimoku,
            macd,
            trend,
            local_maxima: maxima,
            local_minima: minima,
            skipped,
        }
    }
}

/// Compute every indicator for one series with the default parameters.
pub fn compute_indicators(series: &PriceSeries) -> IndicatorSet {
    IndicatorEngine::default().compute(series)
}

fn insufficient(indicator: IndicatorKind, required: usize, available: usize) -> SkippedIndicator {
    SkippedIndicator {
        indicator,
        reason: SkipReason::InsufficientHistory {
            required,
            available,
        },
    }
}

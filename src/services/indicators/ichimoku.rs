//! Ichimoku Cloud indicator.

use super::rolling::{average, rolling_midpoint, shift_backward, shift_forward};
use crate::types::IchimokuLines;

/// Ichimoku Cloud.
///
/// Built from rolling high/low midpoints at three horizons:
/// - Tenkan Sen = midpoint over 9 periods
/// - Kijun Sen = midpoint over 26 periods
/// - Senkou Span A = (Tenkan + Kijun) / 2, plotted 26 periods ahead
/// - Senkou Span B = midpoint over 52 periods, plotted 26 periods ahead
/// - Chikou Span = close, plotted 26 periods behind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ichimoku {
    tenkan_period: usize,
    kijun_period: usize,
    senkou_period: usize,
    displacement: usize,
}

impl Default for Ichimoku {
    fn default() -> Self {
        Self {
            tenkan_period: 9,
            kijun_period: 26,
            senkou_period: 52,
            displacement: 26,
        }
    }
}

impl Ichimoku {
    pub fn new(
        tenkan_period: usize,
        kijun_period: usize,
        senkou_period: usize,
        displacement: usize,
    ) -> Self {
        Self {
            tenkan_period,
            kijun_period,
            senkou_period,
            displacement,
        }
    }

    /// Fewest points for which any line can be defined.
    pub fn min_periods(&self) -> usize {
        self.tenkan_period
            .min(self.kijun_period)
            .min(self.senkou_period)
            .max(1)
    }

    pub fn displacement(&self) -> usize {
        self.displacement
    }

    /// Calculate all five lines from aligned high, low and close columns.
    ///
    /// Returns `None` when there are fewer than [`Ichimoku::min_periods`]
    /// points or the columns differ in length.
    pub fn calculate(&self, high: &[f64], low: &[f64], close: &[f64]) -> Option<IchimokuLines> {
        if high.len() != close.len() || low.len() != close.len() {
            return None;
        }
        if close.len() < self.min_periods() {
            return None;
        }

        let tenkan_sen = rolling_midpoint(high, low, self.tenkan_period);
        let kijun_sen = rolling_midpoint(high, low, self.kijun_period);
        let senkou_span_a = shift_forward(&average(&tenkan_sen, &kijun_sen), self.displacement);
        let senkou_span_b = shift_forward(
            &rolling_midpoint(high, low, self.senkou_period),
            self.displacement,
        );
        let chikou_span = shift_backward(close, self.displacement);

        Some(IchimokuLines {
            tenkan_sen,
            kijun_sen,
            senkou_span_a,
            senkou_span_b,
            chikou_span,
        })
    }
}

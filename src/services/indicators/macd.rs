//! MACD (Moving Average Convergence Divergence) indicator.

use super::ema::Ema;
use crate::types::MacdLines;

/// MACD indicator.
///
/// Shows the relationship between two EMAs of the close:
/// - MACD Line = EMA(12) - EMA(26)
/// - Signal Line = EMA(9) of MACD Line
/// - Histogram = MACD Line - Signal Line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl Macd {
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        Self {
            fast_period,
            slow_period,
            signal_period,
        }
    }

    /// Fewest closes for which the lines are reported.
    pub fn min_periods(&self) -> usize {
        2
    }

    /// Calculate the MACD lines for a close series.
    pub fn calculate(&self, close: &[f64]) -> Option<MacdLines> {
        if close.len() < self.min_periods() {
            return None;
        }

        let ema_fast = Ema::new(self.fast_period).calculate(close);
        let ema_slow = Ema::new(self.slow_period).calculate(close);
        if ema_fast.len() != close.len() || ema_slow.len() != close.len() {
            return None;
        }

        let macd: Vec<f64> = ema_fast.iter().zip(&ema_slow).map(|(f, s)| f - s).collect();
        let signal = Ema::new(self.signal_period).calculate(&macd);
        if signal.len() != macd.len() {
            return None;
        }
        let histogram = macd.iter().zip(&signal).map(|(m, s)| m - s).collect();

        Some(MacdLines {
            ema_fast,
            ema_slow,
            macd,
            signal,
            histogram,
        })
    }
}

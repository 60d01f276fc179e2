//! Buy-signal strength scoring.
//!
//! The strength is the latest close expressed as a percentage of a
//! reference price, and is colored on a green-to-red hue scale.

use crate::types::SignalScore;

/// Reference price treated as a fully bullish reading.
pub const DEFAULT_REFERENCE_PRICE: f64 = 100_000.0;

/// Color used when the strength is zero or below.
pub const NEUTRAL_COLOR: &str = "grey";

/// Value range and hue endpoints for the strength color scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRange {
    pub min_value: f64,
    pub max_value: f64,
    pub start_hue: f64,
    pub end_hue: f64,
}

impl Default for ColorRange {
    fn default() -> Self {
        Self {
            min_value: 0.1,
            max_value: 100.0,
            start_hue: 120.0, // green
            end_hue: 0.0,     // red
        }
    }
}

/// Hue for `value` on a linear scale between `start_hue` and `end_hue`.
///
/// `value` is clamped to `[min_value, max_value]` first.
pub fn interpolate_hue(value: f64, min_value: f64, max_value: f64, start_hue: f64, end_hue: f64) -> f64 {
    let value = value.max(min_value).min(max_value);
    let ratio = (value - min_value) / (max_value - min_value);
    (1.0 - ratio) * start_hue + ratio * end_hue
}

/// HSL color string at full saturation and half lightness.
pub fn interpolate_color(
    value: f64,
    min_value: f64,
    max_value: f64,
    start_hue: f64,
    end_hue: f64,
) -> String {
    let hue = interpolate_hue(value, min_value, max_value, start_hue, end_hue);
    format!("hsl({:?}, 100%, 50%)", hue)
}

/// Latest close as a percentage of `reference_price`. Not clamped.
pub fn strength(latest_close: f64, reference_price: f64) -> f64 {
    latest_close / reference_price * 100.0
}

/// Scores closes against a fixed reference price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalScorer {
    reference_price: f64,
    colors: ColorRange,
}

impl Default for SignalScorer {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_PRICE)
    }
}

impl SignalScorer {
    pub fn new(reference_price: f64) -> Self {
        Self {
            reference_price,
            colors: ColorRange::default(),
        }
    }

    pub fn with_colors(mut self, colors: ColorRange) -> Self {
        self.colors = colors;
        self
    }

    /// Score the most recent close.
    pub fn score(&self, latest_close: f64) -> SignalScore {
        let value = strength(latest_close, self.reference_price);
        SignalScore {
            value,
            color: self.color_for(value),
        }
    }

    /// Color for a strength value; zero, negative and NaN are neutral.
    pub fn color_for(&self, value: f64) -> String {
        if value.is_nan() || value <= 0.0 {
            return NEUTRAL_COLOR.to_string();
        }

        let c = &self.colors;
        interpolate_color(value, c.min_value, c.max_value, c.start_hue, c.end_hue)
    }
}

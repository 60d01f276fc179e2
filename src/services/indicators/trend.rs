//! Linear trend fitted to closing prices.

use crate::types::TrendLine;

/// Ordinary least-squares fit of `values[t]` against `t = 0..n`.
///
/// Returns `(slope, intercept)`, or `None` for fewer than two points.
pub fn linear_fit(values: &[f64]) -> Option<(f64, f64)> {
    let n = values.len();
    if n < 2 {
        return None;
    }

    let x_mean = (n - 1) as f64 / 2.0;
    let y_mean = values.iter().sum::<f64>() / n as f64;

    let (covariance, variance) = values.iter().enumerate().fold((0.0, 0.0), |(cov, var), (t, &y)| {
        let dx = t as f64 - x_mean;
        (cov + dx * (y - y_mean), var + dx * dx)
    });

    let slope = covariance / variance;
    Some((slope, y_mean - slope * x_mean))
}

impl TrendLine {
    /// Fit a trend line over the whole series.
    pub fn fit(values: &[f64]) -> Option<Self> {
        let (slope, intercept) = linear_fit(values)?;
        let values = (0..values.len())
            .map(|t| slope * t as f64 + intercept)
            .collect();

        Some(Self {
            slope,
            intercept,
            values,
        })
    }
}

//! Rolling-window and shift helpers shared by the windowed indicators.
//!
//! Every helper returns a series the same length as its input. Positions
//! without a full window, or shifted in from outside the series, are `None`.

/// Apply `reduce` over each trailing window of `window` values.
fn rolling(values: &[f64], window: usize, reduce: fn(f64, f64) -> f64) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }

    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                return None;
            }
            values[i + 1 - window..=i].iter().copied().reduce(reduce)
        })
        .collect()
}

/// Highest value over the trailing `window` periods, including the current one.
pub fn rolling_max(values: &[f64], window: usize) -> Vec<Option<f64>> {
    rolling(values, window, f64::max)
}

/// Lowest value over the trailing `window` periods, including the current one.
pub fn rolling_min(values: &[f64], window: usize) -> Vec<Option<f64>> {
    rolling(values, window, f64::min)
}

/// Midpoint of the rolling high and rolling low: `(max(high) + min(low)) / 2`.
pub fn rolling_midpoint(high: &[f64], low: &[f64], window: usize) -> Vec<Option<f64>> {
    rolling_max(high, window)
        .into_iter()
        .zip(rolling_min(low, window))
        .map(|(h, l)| Some((h? + l?) / 2.0))
        .collect()
}

/// Element-wise mean of two optional series.
pub fn average(a: &[Option<f64>], b: &[Option<f64>]) -> Vec<Option<f64>> {
    a.iter()
        .zip(b)
        .map(|(x, y)| Some(((*x)? + (*y)?) / 2.0))
        .collect()
}

/// Move values `periods` positions later: `out[t] = values[t - periods]`.
pub fn shift_forward(values: &[Option<f64>], periods: usize) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|t| t.checked_sub(periods).and_then(|src| values[src]))
        .collect()
}

/// Move values `periods` positions earlier: `out[t] = values[t + periods]`.
pub fn shift_backward(values: &[f64], periods: usize) -> Vec<Option<f64>> {
    (0..values.len())
        .map(|t| values.get(t + periods).copied())
        .collect()
}

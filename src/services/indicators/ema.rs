//! Exponential Moving Average (EMA).

/// EMA with smoothing factor `2 / (span + 1)`.
///
/// Seeded with the first observation and updated with
/// `ema[t] = alpha * x[t] + (1 - alpha) * ema[t - 1]`, so the output is
/// defined from the first point on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ema {
    span: usize,
}

impl Ema {
    pub fn new(span: usize) -> Self {
        Self { span }
    }

    pub fn span(&self) -> usize {
        self.span
    }

    /// Smoothing factor.
    pub fn alpha(&self) -> f64 {
        2.0 / (self.span as f64 + 1.0)
    }

    /// Calculate the EMA series for `values`.
    ///
    /// Returns an empty series for empty input or a zero span.
    pub fn calculate(&self, values: &[f64]) -> Vec<f64> {
        let Some((&first, rest)) = values.split_first() else {
            return Vec::new();
        };
        if self.span == 0 {
            return Vec::new();
        }

        let alpha = self.alpha();
        let mut ema = Vec::with_capacity(values.len());
        ema.push(first);

        let mut prev = first;
        for &value in rest {
            prev = alpha * value + (1.0 - alpha) * prev;
            ema.push(prev);
        }

        ema
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ema_alpha() {
        assert_eq!(Ema::new(1).alpha(), 1.0);
        assert_eq!(Ema::new(3).alpha(), 0.5);
    }

    #[test]
    fn test_ema_seeds_with_first_value() {
        let ema = Ema::new(12).calculate(&[42.0]);
        assert_eq!(ema, vec![42.0]);
    }

    #[test]
    fn test_ema_recurrence() {
        // alpha = 0.5
        let ema = Ema::new(3).calculate(&[2.0, 4.0, 8.0]);
        assert_eq!(ema, vec![2.0, 3.0, 5.5]);
    }

    #[test]
    fn test_ema_constant_input() {
        let ema = Ema::new(26).calculate(&[7.0; 40]);
        assert!(ema.iter().all(|&v| (v - 7.0).abs() < 1e-12));
    }

    #[test]
    fn test_ema_empty_and_zero_span() {
        assert!(Ema::new(9).calculate(&[]).is_empty());
        assert!(Ema::new(0).calculate(&[1.0, 2.0]).is_empty());
    }

    #[test]
    fn test_ema_tracks_uptrend_with_lag() {
        let values: Vec<f64> = (0..50).map(|i| i as f64).collect();
        let ema = Ema::new(12).calculate(&values);
        assert_eq!(ema.len(), 50);
        let last = *ema.last().unwrap();
        assert!(last < 49.0 && last > 40.0, "EMA lag unexpected: {}", last);
    }
}

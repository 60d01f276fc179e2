//! Local maxima and minima of a price series.

use crate::types::Extremum;

/// Sparse local extrema, ordered by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalExtrema {
    pub maxima: Vec<Extremum>,
    pub minima: Vec<Extremum>,
}

/// Flag points strictly above (maxima) or strictly below (minima) both
/// neighbors.
///
/// The first and last points have a single neighbor and are never flagged.
/// Equal neighbors never qualify.
pub fn local_extrema(time: &[i64], values: &[f64]) -> LocalExtrema {
    let mut extrema = LocalExtrema::default();
    if time.len() != values.len() {
        return extrema;
    }

    for (offset, w) in values.windows(3).enumerate() {
        let index = offset + 1;
        let (prev, cur, next) = (w[0], w[1], w[2]);
        let point = Extremum {
            index,
            time: time[index],
            price: cur,
        };

        if prev < cur && next < cur {
            extrema.maxima.push(point);
        } else if prev > cur && next > cur {
            extrema.minima.push(point);
        }
    }

    extrema
}

#[cfg(test)]
mod tests {
    use super::*;

    fn times(n: usize) -> Vec<i64> {
        (0..n as i64).map(|i| 1_700_000_000_000 + i * 86_400_000).collect()
    }

    #[test]
    fn test_extrema_zigzag() {
        let values = [1.0, 3.0, 2.0, 5.0, 4.0];
        let found = local_extrema(&times(5), &values);

        let max_idx: Vec<usize> = found.maxima.iter().map(|e| e.index).collect();
        let min_idx: Vec<usize> = found.minima.iter().map(|e| e.index).collect();
        assert_eq!(max_idx, vec![1, 3]);
        assert_eq!(min_idx, vec![2]);
        assert_eq!(found.maxima[0].price, 3.0);
        assert_eq!(found.maxima[1].price, 5.0);
        assert_eq!(found.minima[0].price, 2.0);
    }

    #[test]
    fn test_extrema_carry_timestamps() {
        let t = times(3);
        let found = local_extrema(&t, &[1.0, 2.0, 1.0]);
        assert_eq!(found.maxima[0].time, t[1]);
    }

    #[test]
    fn test_extrema_ignore_ties() {
        let found = local_extrema(&times(5), &[1.0, 2.0, 2.0, 1.0, 1.0]);
        assert!(found.maxima.is_empty());
        assert!(found.minima.is_empty());
    }

    #[test]
    fn test_extrema_short_series() {
        assert_eq!(local_extrema(&times(0), &[]), LocalExtrema::default());
        assert_eq!(local_extrema(&times(1), &[1.0]), LocalExtrema::default());
        assert_eq!(local_extrema(&times(2), &[1.0, 2.0]), LocalExtrema::default());
    }

    #[test]
    fn test_extrema_monotonic_has_none() {
        let values: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let found = local_extrema(&times(10), &values);
        assert!(found.maxima.is_empty());
        assert!(found.minima.is_empty());
    }
}

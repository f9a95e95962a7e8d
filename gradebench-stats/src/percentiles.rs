//! Percentile Computation
//!
//! Percentiles over every sample, slow runs included.

use serde::{Deserialize, Serialize};

/// Percentiles reported for repeated runs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Percentiles {
    /// 50th percentile (median)
    pub p50: f64,
    /// 90th percentile
    pub p90: f64,
    /// 99th percentile
    pub p99: f64,
}

/// Compute a single percentile from samples
///
/// Uses linear interpolation between nearest ranks. Returns 0 for no samples.
///
/// # Examples
///
/// ```
/// # use gradebench_stats::compute_percentile;
/// let samples = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(compute_percentile(&samples, 50.0), 3.0);
/// assert_eq!(compute_percentile(&samples, 100.0), 5.0);
/// ```
pub fn compute_percentile(samples: &[f64], percentile: f64) -> f64 {
    match samples {
        [] => 0.0,
        [only] => *only,
        _ => {
            let mut sorted = samples.to_vec();
            sorted.sort_by(f64::total_cmp);

            let n = sorted.len();
            let rank = (percentile.clamp(0.0, 100.0) / 100.0) * (n - 1) as f64;
            let lower = rank.floor() as usize;
            let upper = (lower + 1).min(n - 1);
            let fraction = rank - lower as f64;

            sorted[lower] + fraction * (sorted[upper] - sorted[lower])
        }
    }
}

/// Compute all reported percentiles
pub fn compute_percentiles(samples: &[f64]) -> Percentiles {
    Percentiles {
        p50: compute_percentile(samples, 50.0),
        p90: compute_percentile(samples, 90.0),
        p99: compute_percentile(samples, 99.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median() {
        let samples = vec![5.0, 1.0, 4.0, 2.0, 3.0];
        assert!((compute_percentile(&samples, 50.0) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_interpolates_between_ranks() {
        let samples = vec![10.0, 20.0];
        assert!((compute_percentile(&samples, 50.0) - 15.0).abs() < f64::EPSILON);
        assert!((compute_percentile(&samples, 90.0) - 19.0).abs() < 1e-9);
    }

    #[test]
    fn test_tail_percentiles() {
        let samples: Vec<f64> = (1..=1000).map(f64::from).collect();
        let p = compute_percentiles(&samples);

        assert!(p.p90 > 895.0 && p.p90 < 905.0);
        assert!(p.p99 > 985.0 && p.p99 < 995.0);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(compute_percentile(&[], 90.0), 0.0);
        assert_eq!(compute_percentile(&[42.0], 99.0), 42.0);
    }
}

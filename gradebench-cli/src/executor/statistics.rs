//! Statistics Computation
//!
//! Parallel computation of summary statistics for entry results.
//!
//! Uses Rayon to summarise every entry independently:
//! - Wall-clock durations of each run
//! - CPU cycles of each run
//! - Class averages each run printed

use super::execution::EntryExecutionResult;
use gradebench_stats::{SummaryStatistics, compute_summary};
use rayon::prelude::*;

/// Summaries for one entry
#[derive(Debug, Clone)]
pub struct EntryStatistics {
    /// Suite entry id
    pub entry_id: String,
    /// `None` when the entry never completed a run
    pub duration: Option<SummaryStatistics>,
    /// Mean CPU cycles per run; 0 without a cycle counter
    pub mean_cycles: f64,
    /// `None` when the entry printed no averages
    pub average: Option<SummaryStatistics>,
}

/// Compute statistics for entry results (parallelized with Rayon)
pub fn compute_statistics(results: &[EntryExecutionResult]) -> Vec<EntryStatistics> {
    results
        .par_iter()
        .map(|r| {
            let samples = r.samples_ns();
            let duration = (!samples.is_empty()).then(|| compute_summary(&samples));

            let mean_cycles = if r.timings.is_empty() {
                0.0
            } else {
                r.timings.iter().map(|t| t.cycles as f64).sum::<f64>() / r.timings.len() as f64
            };

            let averages: Vec<f64> = r.averages.iter().map(|&a| a as f64).collect();
            let average = (!averages.is_empty()).then(|| compute_summary(&averages));

            EntryStatistics {
                entry_id: r.entry_id.clone(),
                duration,
                mean_cycles,
                average,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradebench_core::Timing;
    use gradebench_report::EntryStatus;
    use std::time::Duration;

    fn result(id: &str, millis: &[u64], averages: &[u64]) -> EntryExecutionResult {
        EntryExecutionResult {
            entry_id: id.to_string(),
            label: id.to_string(),
            status: EntryStatus::Passed,
            timings: millis
                .iter()
                .map(|&ms| Timing {
                    label: id.to_string(),
                    elapsed: Duration::from_millis(ms),
                    cycles: 1000,
                })
                .collect(),
            averages: averages.to_vec(),
            duration_ns: 0,
            error_message: None,
        }
    }

    #[test]
    fn test_statistics_per_entry_in_order() {
        let results = vec![
            result("imperative", &[10, 20, 30], &[74, 74, 75]),
            result("create-array", &[1], &[]),
            result("recursive", &[], &[]),
        ];
        let stats = compute_statistics(&results);

        assert_eq!(stats.len(), 3);
        assert_eq!(stats[0].entry_id, "imperative");

        let duration = stats[0].duration.unwrap();
        assert_eq!(duration.sample_count, 3);
        assert!((duration.mean - 20_000_000.0).abs() < 1.0);
        assert_eq!(stats[0].mean_cycles, 1000.0);
        assert_eq!(stats[0].average.unwrap().max, 75.0);

        assert!(stats[1].duration.is_some());
        assert!(stats[1].average.is_none());
        assert!(stats[2].duration.is_none());
        assert_eq!(stats[2].mean_cycles, 0.0);
    }
}

//! Report Building
//!
//! Constructs the run report from execution results and their statistics.
//!
//! ```text
//! EntryExecutionResult + EntryStatistics
//!              │
//!              ▼
//!   ┌─────────────────────┐
//!   │    EntryMetrics     │  Duration stats + cycles
//!   └──────────┬──────────┘
//!              │
//!              ▼
//!   ┌─────────────────────┐
//!   │       Report        │  Ready for JSON or human output
//!   └─────────────────────┘
//! ```

use super::execution::EntryExecutionResult;
use super::metadata::build_report_meta;
use super::statistics::EntryStatistics;
use gradebench_report::{
    EntryMetrics, EntryReport, EntryStatus, FailureInfo, Report, ReportConfig, ReportSummary,
};

/// Build a complete Report from execution results
///
/// `stats` must be in the same order as `results`, as returned by
/// [`compute_statistics`](super::compute_statistics).
pub fn build_report(
    results: &[EntryExecutionResult],
    stats: &[EntryStatistics],
    config: ReportConfig,
    total_duration_ms: f64,
) -> Report {
    let entries: Vec<EntryReport> = results
        .iter()
        .zip(stats)
        .map(|(result, stats)| {
            let duration = stats.duration.as_ref().map(|s| EntryMetrics {
                mean_cycles: stats.mean_cycles,
                ..EntryMetrics::from(s)
            });

            let failure = result.error_message.as_ref().map(|msg| FailureInfo {
                kind: match result.status {
                    EntryStatus::Skipped => "skipped".to_string(),
                    _ => "error".to_string(),
                },
                message: msg.clone(),
            });

            EntryReport {
                id: result.entry_id.clone(),
                label: result.label.clone(),
                status: result.status,
                averages: result.averages.clone(),
                duration,
                average: stats.average,
                failure,
            }
        })
        .collect();

    let summary = ReportSummary::tally(&entries, total_duration_ms);

    Report {
        meta: build_report_meta(config),
        results: entries,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::compute_statistics;
    use gradebench_core::Timing;
    use std::time::Duration;

    fn config() -> ReportConfig {
        ReportConfig {
            suite: "report-card".to_string(),
            students: 100,
            channeling_students: 100,
            repeat: 2,
            allow_overflow: false,
        }
    }

    #[test]
    fn test_build_report() {
        let results = vec![
            EntryExecutionResult {
                entry_id: "imperative".to_string(),
                label: "OOP Class Average".to_string(),
                status: EntryStatus::Passed,
                timings: vec![
                    Timing {
                        label: "OOP Class Average".to_string(),
                        elapsed: Duration::from_micros(10),
                        cycles: 0,
                    };
                    2
                ],
                averages: vec![74, 75],
                duration_ns: 20_000,
                error_message: None,
            },
            EntryExecutionResult {
                entry_id: "recursive".to_string(),
                label: "Recursive Class Average".to_string(),
                status: EntryStatus::Skipped,
                timings: Vec::new(),
                averages: Vec::new(),
                duration_ns: 0,
                error_message: Some("overflows the stack".to_string()),
            },
        ];
        let stats = compute_statistics(&results);
        let report = build_report(&results, &stats, config(), 1.0);

        assert_eq!(report.results.len(), 2);
        let first = &report.results[0];
        assert_eq!(first.averages, vec![74, 75]);
        assert_eq!(first.duration.as_ref().unwrap().mean_ns, 10_000.0);
        assert_eq!(first.average.unwrap().mean, 74.5);

        let second = &report.results[1];
        assert!(second.duration.is_none());
        assert_eq!(second.failure.as_ref().unwrap().kind, "skipped");

        assert_eq!(report.summary.passed, 1);
        assert_eq!(report.summary.skipped, 1);
        assert_eq!(report.meta.config, config());
    }
}

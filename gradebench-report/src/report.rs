//! Report Data Structures

use crate::json::ReportSchema;
use chrono::{DateTime, Utc};
use gradebench_stats::SummaryStatistics;
use serde::{Deserialize, Serialize};

/// Complete run report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Schema, timestamp, system and run configuration
    pub meta: ReportMeta,
    /// One entry per planned or held-back suite entry, in suite order
    pub results: Vec<EntryReport>,
    /// Status counts and total duration
    pub summary: ReportSummary,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Report schema identifier
    pub schema: ReportSchema,
    /// Gradebench version that wrote the report
    pub version: String,
    /// When the report was built
    pub timestamp: DateTime<Utc>,
    /// Host the run happened on
    pub system: SystemInfo,
    /// Configuration of the run
    pub config: ReportConfig,
}

/// Run configuration captured in report metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Suite id
    pub suite: String,
    /// Students per non-channeling strategy
    pub students: u64,
    /// Students for the channeling strategy
    pub channeling_students: u64,
    /// Runs per entry
    pub repeat: u32,
    /// Whether stack-overflowing entries were allowed to run
    pub allow_overflow: bool,
}

/// System information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system
    pub os: String,
    /// CPU architecture
    pub arch: String,
    /// CPU model name
    pub cpu: String,
    /// Logical cores
    pub cpu_cores: u32,
    /// Whether cycle counts are real
    pub has_cycle_counter: bool,
}

/// Individual entry result in the report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryReport {
    /// Suite entry id
    pub id: String,
    /// Label used for timing lines
    pub label: String,
    /// Outcome
    pub status: EntryStatus,
    /// Average printed by each run, in run order
    pub averages: Vec<u64>,
    /// Timing over completed runs
    pub duration: Option<EntryMetrics>,
    /// Spread of the printed averages
    pub average: Option<SummaryStatistics>,
    /// Why the entry failed or was held back
    pub failure: Option<FailureInfo>,
}

/// Entry execution status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Every run succeeded
    Passed,
    /// At least one run returned an error
    Failed,
    /// Held back by the planner
    Skipped,
}

/// Wall-clock timing over every run of one entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryMetrics {
    /// Completed runs
    pub samples: usize,
    /// Mean duration
    pub mean_ns: f64,
    /// Median duration
    pub median_ns: f64,
    /// Sample standard deviation
    pub std_dev_ns: f64,
    /// Fastest run
    pub min_ns: f64,
    /// Slowest run
    pub max_ns: f64,
    /// 90th percentile
    pub p90_ns: f64,
    /// 99th percentile
    pub p99_ns: f64,
    /// Mean CPU cycles per run (0 without a cycle counter)
    pub mean_cycles: f64,
}

impl From<&SummaryStatistics> for EntryMetrics {
    fn from(stats: &SummaryStatistics) -> Self {
        Self {
            samples: stats.sample_count,
            mean_ns: stats.mean,
            median_ns: stats.median,
            std_dev_ns: stats.std_dev,
            min_ns: stats.min,
            max_ns: stats.max,
            p90_ns: stats.p90,
            p99_ns: stats.p99,
            // filled from the cycle samples separately
            mean_cycles: 0.0,
        }
    }
}

/// Failure information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureInfo {
    /// `error` or `skipped`
    pub kind: String,
    /// Error text
    pub message: String,
}

/// Report summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Entries in the report
    pub total_entries: usize,
    /// Entries whose every run succeeded
    pub passed: usize,
    /// Entries with a failed run
    pub failed: usize,
    /// Entries held back
    pub skipped: usize,
    /// Wall-clock time of the whole run
    pub total_duration_ms: f64,
}

impl ReportSummary {
    /// Tally statuses over `results`
    pub fn tally(results: &[EntryReport], total_duration_ms: f64) -> Self {
        let count = |status| results.iter().filter(|r| r.status == status).count();
        Self {
            total_entries: results.len(),
            passed: count(EntryStatus::Passed),
            failed: count(EntryStatus::Failed),
            skipped: count(EntryStatus::Skipped),
            total_duration_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradebench_stats::compute_summary;

    fn entry(id: &str, status: EntryStatus) -> EntryReport {
        EntryReport {
            id: id.to_string(),
            label: id.to_string(),
            status,
            averages: Vec::new(),
            duration: None,
            average: None,
            failure: None,
        }
    }

    #[test]
    fn test_summary_tally() {
        let results = vec![
            entry("imperative", EntryStatus::Passed),
            entry("recursive", EntryStatus::Skipped),
            entry("channeling", EntryStatus::Failed),
            entry("higher-order", EntryStatus::Passed),
        ];
        let summary = ReportSummary::tally(&results, 12.5);
        assert_eq!(summary.total_entries, 4);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.skipped, 1);
    }

    #[test]
    fn test_metrics_from_summary() {
        let stats = compute_summary(&[100.0, 200.0, 300.0]);
        let metrics = EntryMetrics::from(&stats);
        assert_eq!(metrics.samples, 3);
        assert_eq!(metrics.mean_ns, 200.0);
        assert_eq!(metrics.max_ns, 300.0);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&EntryStatus::Skipped).unwrap();
        assert_eq!(json, "\"skipped\"");
    }
}

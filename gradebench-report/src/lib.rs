#![warn(missing_docs)]
//! Gradebench Report - Run Reports
//!
//! Data structures describing a harness run and the machine-readable output
//! format. The human-readable rendering lives with the CLI.

mod json;
mod report;

pub use json::{REPORT_SCHEMA, ReportSchema, generate_json_report};
pub use report::{
    EntryMetrics, EntryReport, EntryStatus, FailureInfo, Report, ReportConfig, ReportMeta,
    ReportSummary, SystemInfo,
};

/// Format a nanosecond count with the largest unit that keeps it above one
pub fn format_duration(nanos: f64) -> String {
    if nanos >= 1_000_000_000.0 {
        format!("{:.2} s", nanos / 1_000_000_000.0)
    } else if nanos >= 1_000_000.0 {
        format!("{:.2} ms", nanos / 1_000_000.0)
    } else if nanos >= 1_000.0 {
        format!("{:.2} µs", nanos / 1_000.0)
    } else {
        format!("{:.0} ns", nanos)
    }
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Human,
    /// JSON with full schema
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

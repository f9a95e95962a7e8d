//! JSON Output

use crate::report::Report;
use serde::{Deserialize, Serialize};

/// Schema identifier stamped into every report
pub const REPORT_SCHEMA: &str = "gradebench-report";

/// Schema information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSchema {
    /// Schema identifier
    pub schema: String,
    /// Schema version
    pub version: u32,
}

impl ReportSchema {
    /// Schema of reports written by this version
    pub fn current() -> Self {
        Self {
            schema: REPORT_SCHEMA.to_string(),
            version: 1,
        }
    }
}

/// Generate a prettified JSON report.
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

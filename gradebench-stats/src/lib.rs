#![warn(missing_docs)]
//! Gradebench Statistics
//!
//! Summaries over repeated runs of one entry: wall-clock durations and the
//! class averages each run printed.
//! - Percentiles by linear interpolation between nearest ranks
//! - Mean, median and sample standard deviation

mod percentiles;
mod summary;

pub use percentiles::{Percentiles, compute_percentile, compute_percentiles};
pub use summary::{SummaryStatistics, compute_summary};

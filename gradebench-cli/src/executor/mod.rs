//! Entry Executor
//!
//! Runs planned entries and turns what they recorded into a report.
//!
//! ## Pipeline Overview
//!
//! ```text
//! ExecutionPlan (suite entries, filtered)
//!       │
//!       ▼
//! ┌─────────────┐
//! │  execution  │  Decorate with the monitor, run `repeat` times
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ statistics  │  Summarise durations and averages (parallel)
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   report    │  Build Report with metadata
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output
//! └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`execution`] - Runs entries through the runner/decorator chain
//! - [`statistics`] - Parallel statistics computation
//! - [`report`] - Report building
//! - [`formatting`] - Human-readable output formatting
//! - [`metadata`] - System metadata collection

mod execution;
mod formatting;
mod metadata;
mod report;
mod statistics;

pub use execution::{EntryExecutionResult, ExecutionConfig, Executor};
pub use formatting::format_human_output;
pub use report::build_report;
pub use statistics::{EntryStatistics, compute_statistics};

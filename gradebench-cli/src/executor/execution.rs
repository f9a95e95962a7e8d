//! Entry Execution
//!
//! Every planned entry is built into a runner, wrapped with the timing
//! monitor, and run `repeat` times on the calling thread:
//!
//! ```text
//! SuiteEntry ──runner()──► Box<dyn Runner> ──decorate(monitor_into)──► run × repeat
//!                                │                      │
//!                                ▼                      ▼
//!                      Recorder<RunOutcome>     Recorder<Timing>
//! ```
//!
//! A failed outcome does not stop the remaining runs or entries. A stack
//! overflow aborts the whole process; nothing here can observe it.

use crate::planner::ExecutionPlan;
use gradebench_core::{Recorder, Timing, decorate, monitor_into};
use gradebench_report::EntryStatus;
use gradebench_school::{Classroom, RunOutcome, SuiteEntry, Workload};
use std::time::Instant;

/// Configuration for entry execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionConfig {
    /// Runs per entry
    pub repeat: u32,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self { repeat: 1 }
    }
}

/// Result from executing a single entry
#[derive(Debug, Clone)]
pub struct EntryExecutionResult {
    /// Suite entry id
    pub entry_id: String,
    /// Label used for timing lines
    pub label: String,
    /// Passed, failed or held back
    pub status: EntryStatus,
    /// One timing per completed run
    pub timings: Vec<Timing>,
    /// Average printed by each successful run
    pub averages: Vec<u64>,
    /// Wall-clock time across all runs
    pub duration_ns: u64,
    /// First failure, or why the entry was held back
    pub error_message: Option<String>,
}

impl EntryExecutionResult {
    fn skipped(entry: &SuiteEntry) -> Self {
        Self {
            entry_id: entry.id.to_string(),
            label: entry.label.to_string(),
            status: EntryStatus::Skipped,
            timings: Vec::new(),
            averages: Vec::new(),
            duration_ns: 0,
            error_message: Some("overflows the stack; pass --allow-overflow to run".to_string()),
        }
    }

    /// Wall-clock samples in nanoseconds
    pub fn samples_ns(&self) -> Vec<f64> {
        self.timings
            .iter()
            .map(|t| t.elapsed.as_nanos() as f64)
            .collect()
    }
}

/// Execute planned entries and produce results (in-process, sequential)
pub struct Executor<'a> {
    classroom: &'a Classroom,
    workload: Workload,
    config: ExecutionConfig,
}

impl<'a> Executor<'a> {
    /// Executor grading `workload` in `classroom`
    pub fn new(classroom: &'a Classroom, workload: Workload, config: ExecutionConfig) -> Self {
        Self {
            classroom,
            workload,
            config,
        }
    }

    /// Execute every planned entry, in plan order; skipped entries are reported, not run
    pub fn execute(&self, plan: &ExecutionPlan) -> Vec<EntryExecutionResult> {
        let mut results: Vec<EntryExecutionResult> =
            plan.entries.iter().map(|entry| self.execute_entry(entry)).collect();
        results.extend(plan.skipped.iter().map(EntryExecutionResult::skipped));
        results
    }

    fn execute_entry(&self, entry: &SuiteEntry) -> EntryExecutionResult {
        let timings: Recorder<Timing> = Recorder::new();
        let outcomes: Recorder<RunOutcome> = Recorder::new();

        let runner = decorate(
            entry.runner(self.classroom, &self.workload, outcomes.clone()),
            [monitor_into(entry.label, timings.clone())],
        );

        tracing::debug!(entry = entry.id, repeat = self.config.repeat, "running");
        let start = Instant::now();
        for _ in 0..self.config.repeat.max(1) {
            runner.run();
        }
        let duration_ns = start.elapsed().as_nanos() as u64;

        let mut averages = Vec::new();
        let mut errors = Vec::new();
        for outcome in outcomes.take() {
            match outcome {
                Ok(avg) => averages.push(avg),
                Err(e) => errors.push(e.to_string()),
            }
        }

        let (status, error_message) = if errors.is_empty() {
            (EntryStatus::Passed, None)
        } else {
            errors.dedup();
            (EntryStatus::Failed, Some(errors.join("; ")))
        };

        EntryExecutionResult {
            entry_id: entry.id.to_string(),
            label: entry.label.to_string(),
            status,
            timings: timings.take(),
            averages,
            duration_ns,
            error_message,
        }
    }
}

#![warn(missing_docs)]
//! Gradebench Core - Runners and Instrumentation
//!
//! This crate provides the composition layer every timed computation goes through:
//! - `Runner` trait for zero-argument units of work
//! - `Decorator` functions layering cross-cutting behavior onto runners
//! - `monitor` timing decorator emitting `"<label> took <duration>"`
//! - High-precision timing (RDTSC with Instant fallback)
//! - `Recorder` for collecting timings and results across runs

mod measure;
mod monitor;
mod recorder;
mod runner;

/// Whether this platform provides hardware cycle counters (x86_64 RDTSCP or AArch64 CNTVCT_EL0).
/// When `false`, cycle counts are reported as 0 and only wall-clock durations are available.
pub use measure::HAS_CYCLE_COUNTER;
pub use measure::{Elapsed, Timer};
pub use monitor::{Timing, monitor, monitor_into};
pub use recorder::Recorder;
pub use runner::{Decorator, NoopRunner, Runner, RunnerFn, decorate};

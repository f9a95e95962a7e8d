#![warn(missing_docs)]
//! # Gradebench
//!
//! One computation, the average grade of a class, written in six control-flow
//! styles and timed side by side:
//! - **Imperative / Functional**: counting loops, with and without helper functions
//! - **Recursive / Tail-Recursive**: one stack frame per student; both overflow at full size
//! - **Channeling**: recursion emulated by a chain of spawned tokio tasks
//! - **Higher Order**: map/reduce over a placeholder sequence
//!
//! Every computation is a [`Runner`]; cross-cutting behavior is layered on by
//! [`Decorator`]s, of which [`monitor`] logs `"<label> took <duration>"`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use gradebench::prelude::*;
//! use std::sync::Arc;
//!
//! let classroom = Classroom::new(Arc::new(SkillCatalog::default()));
//! let students = Population::new(1_000)?;
//! let base = RunnerFn::new(move || {
//!     if let Ok(avg) =
//!         classroom.class_average(Strategy::Imperative, students, RandomGrader::from_entropy())
//!     {
//!         println!("Final Class Average: {avg}");
//!     }
//! });
//! decorate(Box::new(base), [monitor("OOP Class Average")]).run();
//! ```

// Re-export core types
pub use gradebench_core::{
    Decorator, Elapsed, HAS_CYCLE_COUNTER, NoopRunner, Recorder, Runner, RunnerFn, Timer, Timing,
    decorate, monitor, monitor_into,
};

// Re-export strategies
pub use gradebench_school::{
    AllocationKind, Classroom, EntryKind, FixedGrader, Grader, GradingStyle, Population,
    RandomGrader, SchoolError, SkillCatalog, Strategy, Suite, SuiteEntry, Workload,
};

// Re-export stats
pub use gradebench_stats::{SummaryStatistics, compute_summary};

// Re-export report types
pub use gradebench_report::{OutputFormat, Report};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Classroom, Decorator, Grader, Population, RandomGrader, Runner, RunnerFn, SkillCatalog,
        Strategy, Suite, decorate, monitor,
    };
}

/// Run the Gradebench CLI harness.
///
/// Call this from a binary's `main()`:
/// ```ignore
/// fn main() {
///     gradebench::run().unwrap();
/// }
/// ```
pub use gradebench_cli::run;

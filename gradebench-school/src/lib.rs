#![warn(missing_docs)]
//! Gradebench School - Grade-Average Computation Strategies
//!
//! One computation, written six ways. A class of students each studies a
//! prefix of a skill catalog, gets a random grade per skill, and the class
//! average is the truncated mean of the student averages. The strategies differ
//! only in control flow, which is what the harness times:
//! - Imperative and functional counting loops
//! - Recursive and tail-recursive descent over the student index
//! - A chain of spawned tasks delivering the total over a oneshot channel
//! - Map/reduce over a placeholder sequence
//!
//! Suites group strategies (plus the slow-team and allocation runners) under
//! the labels and headlines the harness prints.

mod allocation;
mod catalog;
mod channel;
mod error;
mod grader;
mod slow;
mod strategy;
mod student;
mod suite;

pub use allocation::{AllocationKind, AllocationRunner, DEFAULT_ALLOCATION_ITERATIONS};
pub use catalog::{DEFAULT_SKILLS, SkillCatalog};
pub use channel::{ChainOutcome, chain_total};
pub use error::SchoolError;
pub use grader::{FixedGrader, Grader, MAX_GRADE, MAX_SKILLS_STUDIED, MIN_GRADE, RandomGrader};
pub use slow::{
    SLOW_GRADING_DELAY, SLOW_TEAM_SIZE, slow_higher_order_total, slow_student_gpa, winning_total,
};
pub use strategy::{
    Classroom, DEFAULT_CHANNELING_STUDENTS, DEFAULT_STUDENTS, Population, Strategy,
};
pub use student::{GradingStyle, Student, average, map, reduce, student_average};
pub use suite::{EntryKind, RunOutcome, Suite, SuiteEntry, Workload};

//! Allocation micro-runners
//!
//! Four loops contrasting values built in place with values grown after
//! creation: a fixed array filled by index, a vector extended past its initial
//! length, a string rebuilt by concatenation, and two bindings joined into a
//! new string.

use gradebench_core::Runner;
use std::hint::black_box;

/// Iterations per allocation runner
pub const DEFAULT_ALLOCATION_ITERATIONS: u64 = 1_000_000;

/// Which allocation pattern a runner exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllocationKind {
    /// Fixed-size array, later slots assigned by index
    CreateArray,
    /// Two-element vector extended with two more
    UpdateArray,
    /// String reassigned to itself plus a suffix
    CreateString,
    /// Two string bindings concatenated into a third
    UpdateString,
}

impl AllocationKind {
    /// Every allocation pattern
    pub const ALL: [AllocationKind; 4] = [
        AllocationKind::CreateArray,
        AllocationKind::UpdateArray,
        AllocationKind::CreateString,
        AllocationKind::UpdateString,
    ];

    /// Stable identifier
    pub fn id(self) -> &'static str {
        match self {
            AllocationKind::CreateArray => "create-array",
            AllocationKind::UpdateArray => "update-array",
            AllocationKind::CreateString => "create-string",
            AllocationKind::UpdateString => "update-string",
        }
    }

    /// Label used by the timing monitor
    pub fn label(self) -> &'static str {
        match self {
            AllocationKind::CreateArray => "CreateArrayRunner",
            AllocationKind::UpdateArray => "UpdateArrayRunner",
            AllocationKind::CreateString => "CreateStringRunner",
            AllocationKind::UpdateString => "UpdateStringRunner",
        }
    }

    /// Run the pattern `iterations` times; returns the summed lengths built.
    pub fn exercise(self, iterations: u64) -> usize {
        let mut built = 0;
        for _ in 0..iterations {
            built += match self {
                AllocationKind::CreateArray => {
                    let mut languages = ["Java", "Scala", "", ""];
                    languages[2] = "Node";
                    languages[3] = "Golang";
                    black_box(languages).len()
                }
                AllocationKind::UpdateArray => {
                    let mut languages = vec!["Java", "Scala"];
                    languages.extend(["Node", "Golang"]);
                    black_box(languages).len()
                }
                AllocationKind::CreateString => {
                    let mut name = String::from("first");
                    name = name + " last";
                    black_box(name).len()
                }
                AllocationKind::UpdateString => {
                    let first = black_box("first");
                    let last = black_box("last");
                    black_box(format!("{first}{last}")).len()
                }
            };
        }
        built
    }
}

/// Runner looping one allocation pattern
#[derive(Debug, Clone, Copy)]
pub struct AllocationRunner {
    kind: AllocationKind,
    iterations: u64,
}

impl AllocationRunner {
    /// Runner for `kind`, looping `iterations` times
    pub fn new(kind: AllocationKind, iterations: u64) -> Self {
        Self { kind, iterations }
    }
}

impl Runner for AllocationRunner {
    fn run(&self) {
        black_box(self.kind.exercise(self.iterations));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_builds_expected_lengths() {
        assert_eq!(AllocationKind::CreateArray.exercise(10), 40);
        assert_eq!(AllocationKind::UpdateArray.exercise(10), 40);
        // "first last"
        assert_eq!(AllocationKind::CreateString.exercise(10), 100);
        // "firstlast"
        assert_eq!(AllocationKind::UpdateString.exercise(10), 90);
    }

    #[test]
    fn test_zero_iterations() {
        for kind in AllocationKind::ALL {
            assert_eq!(kind.exercise(0), 0);
        }
    }

    #[test]
    fn test_runner_runs() {
        AllocationRunner::new(AllocationKind::UpdateString, 100).run();
    }
}

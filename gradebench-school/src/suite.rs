//! Suites: named, ordered sets of timed entries
//!
//! A suite fixes what each entry is called, what the monitor labels it, and the
//! headline its result is printed under. Entry order is run order.

use crate::allocation::{AllocationKind, AllocationRunner, DEFAULT_ALLOCATION_ITERATIONS};
use crate::error::SchoolError;
use crate::grader::RandomGrader;
use crate::slow::{SLOW_GRADING_DELAY, SLOW_TEAM_SIZE, slow_higher_order_total, winning_total};
use crate::strategy::{
    Classroom, DEFAULT_CHANNELING_STUDENTS, DEFAULT_STUDENTS, Population, Strategy,
};
use crate::student::average;
use gradebench_core::{Recorder, Runner};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Outcome of one run of an entry: the average it printed, or why it failed
pub type RunOutcome = Result<u64, SchoolError>;

/// Named group of entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Suite {
    /// Class averages, every headline `Final Class Average`
    #[default]
    ReportCard,
    /// Team averages with per-strategy headlines
    Team,
    /// Five slow-grading students, sequential vs threaded
    SlowTeam,
    /// Allocation micro-runners
    Allocation,
}

impl Suite {
    /// Every suite
    pub const ALL: [Suite; 4] = [Suite::ReportCard, Suite::Team, Suite::SlowTeam, Suite::Allocation];

    /// Stable identifier
    pub fn id(self) -> &'static str {
        match self {
            Suite::ReportCard => "report-card",
            Suite::Team => "team",
            Suite::SlowTeam => "slow-team",
            Suite::Allocation => "allocation",
        }
    }

    /// Entries in run order
    pub fn entries(self) -> Vec<SuiteEntry> {
        match self {
            Suite::ReportCard => vec![
                strategy_entry(Strategy::Imperative, "OOP Class Average", "Final Class Average"),
                strategy_entry(
                    Strategy::Functional,
                    "Functioning Class Average",
                    "Final Class Average",
                ),
                strategy_entry(
                    Strategy::Recursive,
                    "Recursive Class Average",
                    "Final Class Average",
                ),
                strategy_entry(
                    Strategy::TailRecursive,
                    "Tail Recursion Class Average",
                    "Final Class Average",
                ),
                strategy_entry(
                    Strategy::Channeling,
                    "Channeling for Recursion (Abbreviated)",
                    "Final Class Average",
                ),
                strategy_entry(
                    Strategy::HigherOrder,
                    "Higher Order Functions",
                    "Final Class Average",
                ),
            ],
            Suite::Team => vec![
                strategy_entry(Strategy::Imperative, "OOP Team", "OOP Team Average"),
                strategy_entry(
                    Strategy::Functional,
                    "Functioning Team",
                    "Functioning Team Average",
                ),
                strategy_entry(Strategy::Recursive, "Recursive Team", "Recursive Team Average"),
                strategy_entry(
                    Strategy::TailRecursive,
                    "Tail Recursion Team",
                    "Final Team Average",
                ),
                strategy_entry(Strategy::Channeling, "Channeling Team", "Channeling Team Average"),
                strategy_entry(Strategy::HigherOrder, "Higher Order Team", "Final Team Average"),
            ],
            Suite::SlowTeam => vec![
                SuiteEntry {
                    id: "slow-higher-order",
                    label: "Slow Higher Order Functions",
                    headline: Some("Final Team Average"),
                    kind: EntryKind::SlowHigherOrder,
                },
                SuiteEntry {
                    id: "winning",
                    label: "Winning Team",
                    headline: Some("Final Team Average"),
                    kind: EntryKind::Winning,
                },
            ],
            Suite::Allocation => AllocationKind::ALL
                .into_iter()
                .map(|kind| SuiteEntry {
                    id: kind.id(),
                    label: kind.label(),
                    headline: None,
                    kind: EntryKind::Allocation(kind),
                })
                .collect(),
        }
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Suite {
    type Err = SchoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Suite::ALL
            .into_iter()
            .find(|suite| suite.id() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Suite::ALL.iter().map(|s| s.id()).collect();
                SchoolError::UnknownSuite(s.to_string(), known.join(", "))
            })
    }
}

/// What an entry computes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Class average via a computation strategy
    Strategy(Strategy),
    /// Slow team graded sequentially with map/reduce
    SlowHigherOrder,
    /// Slow team graded on one thread per student
    Winning,
    /// Allocation micro-runner
    Allocation(AllocationKind),
}

/// One timed entry of a suite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteEntry {
    /// Identifier matched by filters
    pub id: &'static str,
    /// Label the timing monitor logs
    pub label: &'static str,
    /// Headline printed before the computed average, if the entry computes one
    pub headline: Option<&'static str>,
    /// What the entry computes
    pub kind: EntryKind,
}

fn strategy_entry(strategy: Strategy, label: &'static str, headline: &'static str) -> SuiteEntry {
    SuiteEntry {
        id: strategy.id(),
        label,
        headline: Some(headline),
        kind: EntryKind::Strategy(strategy),
    }
}

impl SuiteEntry {
    /// Whether running this entry at full size exhausts the stack
    pub fn overflows_stack(&self) -> bool {
        matches!(self.kind, EntryKind::Strategy(s) if s.overflows_stack())
    }

    /// Build the runner for this entry.
    ///
    /// Each run prints `"<headline>: <average>"` and pushes its outcome into
    /// `outcomes`. Allocation entries print and record nothing.
    pub fn runner(
        &self,
        classroom: &Classroom,
        workload: &Workload,
        outcomes: Recorder<RunOutcome>,
    ) -> Box<dyn Runner> {
        let headline = self.headline.unwrap_or(self.label);
        match self.kind {
            EntryKind::Strategy(strategy) => Box::new(StrategyRunner {
                strategy,
                headline,
                classroom: classroom.clone(),
                population: workload.population_for(strategy),
                outcomes,
            }),
            EntryKind::SlowHigherOrder | EntryKind::Winning => Box::new(SlowTeamRunner {
                threaded: self.kind == EntryKind::Winning,
                headline,
                classroom: classroom.clone(),
                team: workload.slow_students,
                delay: workload.slow_delay,
                outcomes,
            }),
            EntryKind::Allocation(kind) => {
                Box::new(AllocationRunner::new(kind, workload.allocation_iterations))
            }
        }
    }
}

/// Sizes every entry runs at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workload {
    /// Students for every strategy except channeling
    pub students: Population,
    /// Students for the channeling strategy
    pub channeling_students: Population,
    /// Students in the slow team
    pub slow_students: Population,
    /// Grading delay per slow student
    pub slow_delay: Duration,
    /// Iterations per allocation runner
    pub allocation_iterations: u64,
}

impl Workload {
    /// Population a strategy runs over
    pub fn population_for(&self, strategy: Strategy) -> Population {
        match strategy {
            Strategy::Channeling => self.channeling_students,
            _ => self.students,
        }
    }
}

impl Default for Workload {
    fn default() -> Self {
        // the constants are all non-zero
        let population = |n| Population::new(n).unwrap_or(Population::MIN);
        Self {
            students: population(DEFAULT_STUDENTS),
            channeling_students: population(DEFAULT_CHANNELING_STUDENTS),
            slow_students: population(SLOW_TEAM_SIZE),
            slow_delay: SLOW_GRADING_DELAY,
            allocation_iterations: DEFAULT_ALLOCATION_ITERATIONS,
        }
    }
}

fn publish(headline: &str, outcome: RunOutcome, outcomes: &Recorder<RunOutcome>) {
    match &outcome {
        Ok(avg) => println!("{headline}: {avg}"),
        Err(e) => tracing::error!("{headline} failed: {e}"),
    }
    outcomes.push(outcome);
}

struct StrategyRunner {
    strategy: Strategy,
    headline: &'static str,
    classroom: Classroom,
    population: Population,
    outcomes: Recorder<RunOutcome>,
}

impl Runner for StrategyRunner {
    fn run(&self) {
        let outcome = self.classroom.class_average(
            self.strategy,
            self.population,
            RandomGrader::from_entropy(),
        );
        publish(self.headline, outcome, &self.outcomes);
    }
}

struct SlowTeamRunner {
    threaded: bool,
    headline: &'static str,
    classroom: Classroom,
    team: Population,
    delay: Duration,
    outcomes: Recorder<RunOutcome>,
}

impl Runner for SlowTeamRunner {
    fn run(&self) {
        let catalog = self.classroom.catalog();
        let total = if self.threaded {
            winning_total(catalog, self.team, self.delay, RandomGrader::from_entropy)
        } else {
            let mut grader = RandomGrader::from_entropy();
            Ok(slow_higher_order_total(
                catalog,
                self.team,
                self.delay,
                &mut grader,
            ))
        };
        let outcome = total.map(|total| average(total, self.team.get()));
        publish(self.headline, outcome, &self.outcomes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SkillCatalog;
    use std::sync::Arc;

    fn small_workload() -> Workload {
        Workload {
            students: Population::new(200).unwrap(),
            channeling_students: Population::new(200).unwrap(),
            slow_students: Population::new(3).unwrap(),
            slow_delay: Duration::ZERO,
            allocation_iterations: 10,
        }
    }

    #[test]
    fn test_report_card_order_and_headlines() {
        let entries = Suite::ReportCard.entries();
        let ids: Vec<&str> = entries.iter().map(|e| e.id).collect();
        assert_eq!(
            ids,
            vec![
                "imperative",
                "functional",
                "recursive",
                "tail-recursive",
                "channeling",
                "higher-order"
            ]
        );
        assert!(
            entries
                .iter()
                .all(|e| e.headline == Some("Final Class Average"))
        );
    }

    #[test]
    fn test_team_headlines() {
        let headlines: Vec<&str> = Suite::Team
            .entries()
            .iter()
            .filter_map(|e| e.headline)
            .collect();
        assert_eq!(headlines[0], "OOP Team Average");
        assert_eq!(headlines[3], "Final Team Average");
        assert_eq!(headlines[5], "Final Team Average");
    }

    #[test]
    fn test_overflowing_entries() {
        let overflowing: Vec<&str> = Suite::Team
            .entries()
            .into_iter()
            .filter(SuiteEntry::overflows_stack)
            .map(|e| e.id)
            .collect();
        assert_eq!(overflowing, vec!["recursive", "tail-recursive"]);
        assert!(!Suite::SlowTeam.entries().iter().any(SuiteEntry::overflows_stack));
    }

    #[test]
    fn test_suite_ids_round_trip() {
        for suite in Suite::ALL {
            assert_eq!(suite.id().parse::<Suite>(), Ok(suite));
        }
        assert_eq!("slow_team".parse::<Suite>(), Ok(Suite::SlowTeam));
        assert!("recess".parse::<Suite>().is_err());
    }

    #[test]
    fn test_runners_record_averages_in_range() {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .unwrap();
        let classroom =
            Classroom::new(Arc::new(SkillCatalog::default())).with_runtime(rt.handle().clone());
        let workload = small_workload();

        for suite in [Suite::ReportCard, Suite::SlowTeam] {
            for entry in suite.entries() {
                let outcomes = Recorder::new();
                entry.runner(&classroom, &workload, outcomes.clone()).run();

                let recorded = outcomes.take();
                assert_eq!(recorded.len(), 1, "{}", entry.id);
                let avg = recorded[0].clone().unwrap();
                assert!((50..=99).contains(&avg), "{}: {avg}", entry.id);
            }
        }
    }

    #[test]
    fn test_allocation_runners_record_nothing() {
        let classroom = Classroom::new(Arc::new(SkillCatalog::default()));
        let outcomes = Recorder::new();
        for entry in Suite::Allocation.entries() {
            entry
                .runner(&classroom, &small_workload(), outcomes.clone())
                .run();
        }
        assert!(outcomes.is_empty());
    }

    #[test]
    fn test_default_workload() {
        let workload = Workload::default();
        assert_eq!(workload.students.get(), 10_000_000);
        assert_eq!(workload.population_for(Strategy::Channeling).get(), 1_000_000);
        assert_eq!(workload.slow_students.get(), 5);
    }
}

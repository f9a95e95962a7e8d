//! Computation Strategies
//!
//! Six ways of computing the same class average. Each student studies a prefix
//! of the catalog, gets a truncated average of their grades, and the class
//! average is the truncated average of the student averages:
//!
//! | Strategy         | Control flow                                   | Student grading |
//! |------------------|------------------------------------------------|-----------------|
//! | `Imperative`     | counting loop, mutates `Student::average`      | loop            |
//! | `Functional`     | same loop, logic in helper functions           | helpers         |
//! | `Recursive`      | non-tail recursion over the student index      | recursive       |
//! | `TailRecursive`  | recursion carrying the running total           | tail-recursive  |
//! | `Channeling`     | one spawned task per student, oneshot result   | tail-recursive  |
//! | `HigherOrder`    | map placeholders to averages, reduce with `+`  | map/reduce      |
//!
//! `Recursive` and `TailRecursive` use one stack frame per student. Rust makes
//! no tail-call guarantee, so at the default population both exhaust the stack
//! and the process aborts. That is their documented behavior; the recursion
//! depth is never capped.

use crate::catalog::SkillCatalog;
use crate::channel::chain_total;
use crate::error::SchoolError;
use crate::grader::Grader;
use crate::student::{GradingStyle, Student, average, map, reduce, student_average};
use std::fmt;
use std::hint::black_box;
use std::num::NonZeroU64;
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::runtime::Handle;

/// Students per strategy run
pub const DEFAULT_STUDENTS: u64 = 10_000_000;

/// Students per channeling run
pub const DEFAULT_CHANNELING_STUDENTS: u64 = 1_000_000;

/// Control-flow idiom used to compute the class average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Counting loop mutating an accumulator and each student's average
    Imperative,
    /// Counting loop calling extracted helper functions
    Functional,
    /// Non-tail recursion summing return values
    Recursive,
    /// Recursion with the running total passed in tail position
    TailRecursive,
    /// Recursion emulated by a chain of spawned tasks
    Channeling,
    /// Map/reduce over a placeholder sequence
    HigherOrder,
}

impl Strategy {
    /// Every strategy, in declaration order
    pub const ALL: [Strategy; 6] = [
        Strategy::Imperative,
        Strategy::Functional,
        Strategy::Recursive,
        Strategy::TailRecursive,
        Strategy::Channeling,
        Strategy::HigherOrder,
    ];

    /// Stable identifier used on the command line and in reports
    pub fn id(self) -> &'static str {
        match self {
            Strategy::Imperative => "imperative",
            Strategy::Functional => "functional",
            Strategy::Recursive => "recursive",
            Strategy::TailRecursive => "tail-recursive",
            Strategy::Channeling => "channeling",
            Strategy::HigherOrder => "higher-order",
        }
    }

    /// Whether the strategy needs one stack frame per student
    pub fn overflows_stack(self) -> bool {
        matches!(self, Strategy::Recursive | Strategy::TailRecursive)
    }

    /// How this strategy totals each student's grades
    pub fn grading_style(self) -> GradingStyle {
        match self {
            Strategy::Imperative => GradingStyle::Loop,
            Strategy::Functional => GradingStyle::Helpers,
            Strategy::Recursive => GradingStyle::Recursive,
            Strategy::TailRecursive | Strategy::Channeling => GradingStyle::TailRecursive,
            Strategy::HigherOrder => GradingStyle::MapReduce,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Strategy {
    type Err = SchoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.id() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Strategy::ALL.iter().map(|s| s.id()).collect();
                SchoolError::UnknownStrategy(s.to_string(), known.join(", "))
            })
    }
}

/// Number of students in a run; never zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Population(NonZeroU64);

impl Population {
    /// A single student
    pub const MIN: Population = Population(NonZeroU64::MIN);

    /// Population of `students`; fails for zero
    pub fn new(students: u64) -> Result<Self, SchoolError> {
        NonZeroU64::new(students)
            .map(Self)
            .ok_or(SchoolError::EmptyPopulation)
    }

    /// Number of students
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

/// Shared context a strategy runs in: the catalog, and the runtime the
/// channeling strategy spawns its tasks on.
#[derive(Debug, Clone)]
pub struct Classroom {
    catalog: Arc<SkillCatalog>,
    runtime: Option<Handle>,
}

impl Classroom {
    /// Classroom without an async runtime
    pub fn new(catalog: Arc<SkillCatalog>) -> Self {
        Self {
            catalog,
            runtime: None,
        }
    }

    /// Attach the runtime used by [`Strategy::Channeling`]
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// The shared catalog
    pub fn catalog(&self) -> &Arc<SkillCatalog> {
        &self.catalog
    }

    /// Sum of every student's average.
    pub fn total<G>(
        &self,
        strategy: Strategy,
        population: Population,
        mut grader: G,
    ) -> Result<u64, SchoolError>
    where
        G: Grader + Send + 'static,
    {
        let catalog = self.catalog.as_ref();
        let students = population.get();
        let style = strategy.grading_style();

        let total = match strategy {
            Strategy::Imperative => imperative_total(catalog, students, &mut grader),
            Strategy::Functional => functional_total(catalog, students, &mut grader, style),
            Strategy::Recursive => recursive_total(0, students, catalog, &mut grader, style),
            Strategy::TailRecursive => tail_total(0, 0, students, catalog, &mut grader, style),
            Strategy::HigherOrder => higher_order_total(catalog, students, &mut grader, style),
            Strategy::Channeling => {
                let runtime = self.runtime.as_ref().ok_or(SchoolError::MissingRuntime)?;
                channeling_total(runtime, Arc::clone(&self.catalog), students, grader, style)?
            }
        };

        tracing::debug!(strategy = %strategy, students, total, "class total computed");
        Ok(total)
    }

    /// Class average: the truncated mean of student averages.
    pub fn class_average<G>(
        &self,
        strategy: Strategy,
        population: Population,
        grader: G,
    ) -> Result<u64, SchoolError>
    where
        G: Grader + Send + 'static,
    {
        let total = self.total(strategy, population, grader)?;
        Ok(average(total, population.get()))
    }
}

/// Enroll one student and return their average, totalled in `style`.
fn student_gpa<G: Grader>(catalog: &SkillCatalog, grader: &mut G, style: GradingStyle) -> u64 {
    let skills = catalog.prefix(grader.skills_studied(catalog.len()));
    student_average(skills, grader, style)
}

fn imperative_total<G: Grader>(catalog: &SkillCatalog, students: u64, grader: &mut G) -> u64 {
    let mut total = 0;
    for _ in 0..students {
        let mut student = Student::enroll(catalog, grader);
        total += student.learn(grader);
    }
    total
}

fn functional_total<G: Grader>(
    catalog: &SkillCatalog,
    students: u64,
    grader: &mut G,
    style: GradingStyle,
) -> u64 {
    let mut total = 0;
    for _ in 0..students {
        total += student_gpa(catalog, grader, style);
    }
    total
}

fn recursive_total<G: Grader>(
    index: u64,
    students: u64,
    catalog: &SkillCatalog,
    grader: &mut G,
    style: GradingStyle,
) -> u64 {
    if index >= students {
        return 0;
    }
    let gpa = student_gpa(catalog, grader, style);
    // black_box keeps LLVM from folding the addition into a loop
    gpa + black_box(recursive_total(index + 1, students, catalog, grader, style))
}

fn tail_total<G: Grader>(
    index: u64,
    running: u64,
    students: u64,
    catalog: &SkillCatalog,
    grader: &mut G,
    style: GradingStyle,
) -> u64 {
    if index >= students {
        return running;
    }
    let gpa = student_gpa(catalog, grader, style);
    // without black_box LLVM rewrites the tail call as a jump and no frames pile up
    black_box(tail_total(
        index + 1,
        running + gpa,
        students,
        catalog,
        grader,
        style,
    ))
}

fn higher_order_total<G: Grader>(
    catalog: &SkillCatalog,
    students: u64,
    grader: &mut G,
    style: GradingStyle,
) -> u64 {
    let placeholders = vec![(); students as usize];
    let gpas = map(&placeholders, |_| student_gpa(catalog, grader, style));
    reduce(&gpas, 0, |old, new| old + new)
}

fn channeling_total<G>(
    runtime: &Handle,
    catalog: Arc<SkillCatalog>,
    students: u64,
    grader: G,
    style: GradingStyle,
) -> Result<u64, SchoolError>
where
    G: Grader + Send + 'static,
{
    // steps run one after another, so the lock is never contended
    let grader = Mutex::new(grader);
    let outcome = chain_total(runtime, students, move || {
        let mut grader = grader.lock().unwrap_or_else(PoisonError::into_inner);
        student_gpa(&catalog, &mut *grader, style)
    })?;
    Ok(outcome.total)
}

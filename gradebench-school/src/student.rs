//! Students and the ways a student's grades are totalled
//!
//! A student studies a prefix of the skill catalog, earns one grade per skill,
//! and averages them with truncating integer division. The total can be
//! produced in several styles; each strategy grades its students in the style
//! matching its own control flow.

use crate::catalog::SkillCatalog;
use crate::grader::Grader;

/// How a student's grades are summed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradingStyle {
    /// Loop over skills mutating a running sum
    Loop,
    /// Loop extracted into helper functions
    Helpers,
    /// Non-tail recursion over the skill index
    Recursive,
    /// Recursion carrying the running total as an argument
    TailRecursive,
    /// Map skills to grades, reduce with addition
    MapReduce,
}

/// A student holding the skills studied and the resulting average
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student<'a> {
    skills: &'a [String],
    average: u64,
}

impl<'a> Student<'a> {
    /// Student who studied `skills`, not yet graded
    pub fn new(skills: &'a [String]) -> Self {
        Self { skills, average: 0 }
    }

    /// Enroll a student in as many leading catalog skills as `grader` picks
    pub fn enroll<G: Grader>(catalog: &'a SkillCatalog, grader: &mut G) -> Self {
        Self::new(catalog.prefix(grader.skills_studied(catalog.len())))
    }

    /// Skills studied
    pub fn skills(&self) -> &[String] {
        self.skills
    }

    /// Average stored by the last call to [`Student::learn`]
    pub fn average(&self) -> u64 {
        self.average
    }

    /// Grade every skill and store the average on the student.
    pub fn learn<G: Grader>(&mut self, grader: &mut G) -> u64 {
        let mut sum = 0;
        for _ in self.skills {
            sum += grader.grade();
        }
        self.average = sum / self.skills.len() as u64;
        self.average
    }
}

/// Average of one student's grades over `skills`, totalled in `style`.
///
/// `skills` must be non-empty; [`SkillCatalog::prefix`] guarantees that.
pub fn student_average<G: Grader>(skills: &[String], grader: &mut G, style: GradingStyle) -> u64 {
    let count = skills.len() as u64;
    match style {
        GradingStyle::Loop => Student::new(skills).learn(grader),
        GradingStyle::Helpers => average(total_by_helpers(skills, grader), count),
        GradingStyle::Recursive => average(total_recursively(0, skills, grader), count),
        GradingStyle::TailRecursive => average(total_tailwise(0, 0, skills, grader), count),
        GradingStyle::MapReduce => average(total_by_map_reduce(skills, grader), count),
    }
}

/// Truncating integer average
pub fn average(total: u64, count: u64) -> u64 {
    total / count
}

fn total_by_helpers<G: Grader>(skills: &[String], grader: &mut G) -> u64 {
    skills.iter().map(|_| grader.grade()).sum()
}

fn total_recursively<G: Grader>(index: usize, skills: &[String], grader: &mut G) -> u64 {
    if index >= skills.len() {
        return 0;
    }
    grader.grade() + total_recursively(index + 1, skills, grader)
}

fn total_tailwise<G: Grader>(index: usize, running: u64, skills: &[String], grader: &mut G) -> u64 {
    if index >= skills.len() {
        return running;
    }
    let grade = grader.grade();
    total_tailwise(index + 1, running + grade, skills, grader)
}

fn total_by_map_reduce<G: Grader>(skills: &[String], grader: &mut G) -> u64 {
    reduce(&map(skills, |_| grader.grade()), 0, |old, new| old + new)
}

/// Apply `f` to every item, collecting the results in order.
pub fn map<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    items.iter().map(f).collect()
}

/// Fold `items` left to right starting from `init`.
pub fn reduce<T, F>(items: &[T], init: T, mut f: F) -> T
where
    T: Copy,
    F: FnMut(T, T) -> T,
{
    let mut total = init;
    for &item in items {
        total = f(total, item);
    }
    total
}

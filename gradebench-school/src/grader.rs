//! Grading sources
//!
//! Every random decision a strategy makes goes through a `Grader`: how many
//! catalog skills a student studies, and the grade earned on each. The harness
//! uses `RandomGrader`; tests substitute deterministic graders.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lowest grade a skill can earn
pub const MIN_GRADE: u64 = 50;

/// Highest grade a skill can earn
pub const MAX_GRADE: u64 = 99;

/// Most skills a randomly graded student studies
pub const MAX_SKILLS_STUDIED: usize = 4;

/// Source of skill counts and grades
pub trait Grader {
    /// How many leading catalog skills the next student studies
    fn skills_studied(&mut self, catalog_len: usize) -> usize;

    /// Grade earned on one skill
    fn grade(&mut self) -> u64;
}

impl<G: Grader + ?Sized> Grader for &mut G {
    fn skills_studied(&mut self, catalog_len: usize) -> usize {
        (**self).skills_studied(catalog_len)
    }

    fn grade(&mut self) -> u64 {
        (**self).grade()
    }
}

/// Uniform random grading.
///
/// Students study `1..=min(4, catalog_len)` skills; each skill earns a grade
/// in `[50, 99]`.
#[derive(Debug, Clone)]
pub struct RandomGrader<R = StdRng> {
    rng: R,
}

impl RandomGrader<StdRng> {
    /// Grader seeded from operating-system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Grader with a reproducible sequence
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomGrader<R> {
    /// Grader drawing from an existing generator
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Grader for RandomGrader<R> {
    fn skills_studied(&mut self, catalog_len: usize) -> usize {
        let most = MAX_SKILLS_STUDIED.min(catalog_len).max(1);
        self.rng.gen_range(1..=most)
    }

    fn grade(&mut self) -> u64 {
        self.rng.gen_range(MIN_GRADE..=MAX_GRADE)
    }
}

/// Grader returning the same skill count and grade every time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedGrader {
    /// Skills each student studies
    pub skills: usize,
    /// Grade on every skill
    pub grade: u64,
}

impl Grader for FixedGrader {
    fn skills_studied(&mut self, catalog_len: usize) -> usize {
        self.skills.min(catalog_len)
    }

    fn grade(&mut self) -> u64 {
        self.grade
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_grades_in_range() {
        let mut grader = RandomGrader::seeded(7);
        for _ in 0..10_000 {
            let grade = grader.grade();
            assert!((MIN_GRADE..=MAX_GRADE).contains(&grade));
        }
    }

    #[test]
    fn test_random_skill_counts_in_range() {
        let mut grader = RandomGrader::seeded(11);
        let mut seen = [false; MAX_SKILLS_STUDIED + 1];
        for _ in 0..10_000 {
            let count = grader.skills_studied(5);
            assert!((1..=MAX_SKILLS_STUDIED).contains(&count));
            seen[count] = true;
        }
        // every count from 1 to 4 shows up, 5 never does
        assert!(seen[1..].iter().all(|&s| s));
    }

    #[test]
    fn test_small_catalog_limits_skill_count() {
        let mut grader = RandomGrader::seeded(3);
        for _ in 0..1_000 {
            assert_eq!(grader.skills_studied(1), 1);
            assert!(grader.skills_studied(2) <= 2);
        }
    }

    #[test]
    fn test_seeded_graders_repeat() {
        let mut a = RandomGrader::seeded(42);
        let mut b = RandomGrader::seeded(42);
        let xs: Vec<u64> = (0..32).map(|_| a.grade()).collect();
        let ys: Vec<u64> = (0..32).map(|_| b.grade()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_fixed_grader() {
        let mut grader = FixedGrader {
            skills: 5,
            grade: 50,
        };
        assert_eq!(grader.skills_studied(5), 5);
        assert_eq!(grader.skills_studied(3), 3);
        assert_eq!(grader.grade(), 50);
    }
}

//! Slow-grading team
//!
//! Five students whose grading takes a full second each. Graded one after
//! another with map/reduce the team takes about five seconds; graded on one
//! thread per student, with the grades gathered from a channel, it takes about
//! one.

use crate::catalog::SkillCatalog;
use crate::error::SchoolError;
use crate::grader::Grader;
use crate::strategy::Population;
use crate::student::{GradingStyle, map, reduce, student_average};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

/// Students in the slow team
pub const SLOW_TEAM_SIZE: u64 = 5;

/// Time each slow student spends being graded
pub const SLOW_GRADING_DELAY: Duration = Duration::from_secs(1);

/// Grade one student after sleeping for `delay`.
pub fn slow_student_gpa<G: Grader>(catalog: &SkillCatalog, grader: &mut G, delay: Duration) -> u64 {
    thread::sleep(delay);
    let skills = catalog.prefix(grader.skills_studied(catalog.len()));
    student_average(skills, grader, GradingStyle::MapReduce)
}

/// Grade the team one student at a time with map/reduce.
pub fn slow_higher_order_total<G: Grader>(
    catalog: &SkillCatalog,
    team: Population,
    delay: Duration,
    grader: &mut G,
) -> u64 {
    let placeholders = vec![(); team.get() as usize];
    let gpas = map(&placeholders, |_| slow_student_gpa(catalog, grader, delay));
    reduce(&gpas, 0, |old, new| old + new)
}

/// Grade every student on its own thread and sum the grades from a channel.
///
/// `make_grader` is called once per student, on the calling thread.
pub fn winning_total<G, F>(
    catalog: &Arc<SkillCatalog>,
    team: Population,
    delay: Duration,
    mut make_grader: F,
) -> Result<u64, SchoolError>
where
    G: Grader + Send + 'static,
    F: FnMut() -> G,
{
    let (tx, rx) = mpsc::channel();

    for _ in 0..team.get() {
        let tx = tx.clone();
        let catalog = Arc::clone(catalog);
        let mut grader = make_grader();
        thread::spawn(move || {
            let gpa = slow_student_gpa(&catalog, &mut grader, delay);
            let _ = tx.send(gpa);
        });
    }
    drop(tx);

    let (received, total) = rx
        .iter()
        .fold((0u64, 0u64), |(count, sum), gpa| (count + 1, sum + gpa));

    if received != team.get() {
        return Err(SchoolError::TeamIncomplete {
            expected: team.get(),
            received,
        });
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grader::{FixedGrader, RandomGrader};
    use crate::student::average;
    use std::time::Instant;

    fn team() -> Population {
        Population::new(SLOW_TEAM_SIZE).unwrap()
    }

    #[test]
    fn test_slow_higher_order_total() {
        let catalog = SkillCatalog::default();
        let mut grader = FixedGrader {
            skills: 2,
            grade: 80,
        };
        let total = slow_higher_order_total(&catalog, team(), Duration::ZERO, &mut grader);
        assert_eq!(total, 400);
        assert_eq!(average(total, SLOW_TEAM_SIZE), 80);
    }

    #[test]
    fn test_winning_total_collects_every_student() {
        let catalog = Arc::new(SkillCatalog::default());
        let total = winning_total(&catalog, team(), Duration::ZERO, || FixedGrader {
            skills: 1,
            grade: 90,
        })
        .unwrap();
        assert_eq!(total, 450);
    }

    #[test]
    fn test_winning_grades_in_parallel() {
        let catalog = Arc::new(SkillCatalog::default());
        let delay = Duration::from_millis(100);

        let start = Instant::now();
        let mut seed = 0;
        let total = winning_total(&catalog, team(), delay, || {
            seed += 1;
            RandomGrader::seeded(seed)
        })
        .unwrap();
        let elapsed = start.elapsed();

        // sequential grading would need 5 * 100ms
        assert!(elapsed < Duration::from_millis(450), "{elapsed:?}");
        assert!((50..=99).contains(&average(total, SLOW_TEAM_SIZE)));
    }

    #[test]
    fn test_winning_reports_missing_grades() {
        struct Failing;

        impl Grader for Failing {
            fn skills_studied(&mut self, _catalog_len: usize) -> usize {
                panic!("grader failed");
            }

            fn grade(&mut self) -> u64 {
                0
            }
        }

        let catalog = Arc::new(SkillCatalog::default());
        let result = winning_total(&catalog, Population::new(2).unwrap(), Duration::ZERO, || {
            Failing
        });
        assert_eq!(
            result,
            Err(SchoolError::TeamIncomplete {
                expected: 2,
                received: 0
            })
        );
    }
}

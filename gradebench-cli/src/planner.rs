//! Entry Planner
//!
//! Builds the execution plan for one suite.
//!
//! Filtering options:
//! - Regex pattern matching on entry ID
//! - Stack-overflowing entries held back unless explicitly allowed
//!
//! Ordering: entries keep the order the suite declares them in.

use gradebench_school::SuiteEntry;
use regex::Regex;

/// Execution plan for one suite
#[derive(Debug, Clone, Default)]
pub struct ExecutionPlan {
    /// Entries to run, in suite order
    pub entries: Vec<SuiteEntry>,
    /// Entries matching the filter but held back because they overflow the stack
    pub skipped: Vec<SuiteEntry>,
}

impl ExecutionPlan {
    /// Whether nothing matched the filter
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.skipped.is_empty()
    }
}

/// Build execution plan from a suite's entries
pub fn build_plan(
    entries: impl IntoIterator<Item = SuiteEntry>,
    filter: Option<&Regex>,
    allow_overflow: bool,
) -> ExecutionPlan {
    let mut plan = ExecutionPlan::default();

    for entry in entries {
        if let Some(re) = filter {
            if !re.is_match(entry.id) {
                continue;
            }
        }

        if entry.overflows_stack() && !allow_overflow {
            tracing::debug!(entry = entry.id, "held back: overflows the stack");
            plan.skipped.push(entry);
        } else {
            plan.entries.push(entry);
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradebench_school::Suite;

    fn ids(entries: &[SuiteEntry]) -> Vec<&'static str> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_default_plan_matches_entry_point() {
        let plan = build_plan(Suite::ReportCard.entries(), None, false);

        assert_eq!(
            ids(&plan.entries),
            vec!["imperative", "functional", "channeling", "higher-order"]
        );
        assert_eq!(ids(&plan.skipped), vec!["recursive", "tail-recursive"]);
    }

    #[test]
    fn test_allow_overflow_keeps_order() {
        let plan = build_plan(Suite::ReportCard.entries(), None, true);

        assert_eq!(
            ids(&plan.entries),
            vec![
                "imperative",
                "functional",
                "recursive",
                "tail-recursive",
                "channeling",
                "higher-order"
            ]
        );
        assert!(plan.skipped.is_empty());
    }

    #[test]
    fn test_regex_filter() {
        let re = Regex::new("^(imperative|recursive)$").unwrap();
        let plan = build_plan(Suite::Team.entries(), Some(&re), false);

        assert_eq!(ids(&plan.entries), vec!["imperative"]);
        assert_eq!(ids(&plan.skipped), vec!["recursive"]);
    }

    #[test]
    fn test_filter_matching_nothing() {
        let re = Regex::new("recess").unwrap();
        let plan = build_plan(Suite::SlowTeam.entries(), Some(&re), true);
        assert!(plan.is_empty());
    }
}

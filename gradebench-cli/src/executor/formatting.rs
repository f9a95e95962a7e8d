//! Output Formatting
//!
//! Human-readable output for run reports:
//! - Entries in run order with status icons (✓/✗/⊘)
//! - Duration statistics over repeated runs
//! - Spread of the printed class averages
//! - Relative speed table, fastest first

use gradebench_report::{EntryReport, EntryStatus, Report, format_duration};

/// Format a report for human-readable terminal display
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str(&format!("Gradebench Results ({})\n", report.meta.config.suite));
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");

    for result in &report.results {
        let status_icon = match result.status {
            EntryStatus::Passed => "✓",
            EntryStatus::Failed => "✗",
            EntryStatus::Skipped => "⊘",
        };

        output.push_str(&format!("  {} {} ({})\n", status_icon, result.id, result.label));

        if let Some(metrics) = &result.duration {
            output.push_str(&format!(
                "      mean: {}  median: {}  stddev: {}\n",
                format_duration(metrics.mean_ns),
                format_duration(metrics.median_ns),
                format_duration(metrics.std_dev_ns)
            ));
            if metrics.samples > 1 {
                output.push_str(&format!(
                    "      min: {}  max: {}  p90: {}  p99: {}  runs: {}\n",
                    format_duration(metrics.min_ns),
                    format_duration(metrics.max_ns),
                    format_duration(metrics.p90_ns),
                    format_duration(metrics.p99_ns),
                    metrics.samples
                ));
            }
            if metrics.mean_cycles > 0.0 {
                output.push_str(&format!("      cycles: mean {:.0}\n", metrics.mean_cycles));
            }
        }

        if let Some(average) = &result.average {
            if average.sample_count > 1 {
                output.push_str(&format!(
                    "      average: mean {:.2}  min {:.0}  max {:.0}  cv {:.2}%\n",
                    average.mean,
                    average.min,
                    average.max,
                    average.coefficient_of_variation()
                ));
            } else {
                output.push_str(&format!("      average: {:.0}\n", average.mean));
            }
        }

        if let Some(failure) = &result.failure {
            output.push_str(&format!("      {}: {}\n", failure.kind, failure.message));
        }

        output.push('\n');
    }

    let timed: Vec<&EntryReport> = report
        .results
        .iter()
        .filter(|r| r.duration.as_ref().is_some_and(|m| m.mean_ns > 0.0))
        .collect();

    if timed.len() > 1 {
        output.push_str("Relative Speed\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&relative_speed_table(&timed));
    }

    output.push_str("\nSummary\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "  Total: {}  Passed: {}  Failed: {}  Skipped: {}\n",
        report.summary.total_entries,
        report.summary.passed,
        report.summary.failed,
        report.summary.skipped
    ));
    output.push_str(&format!(
        "  Duration: {:.2} ms\n",
        report.summary.total_duration_ms
    ));

    output
}

/// Entries sorted fastest first, each with its slowdown against the fastest
fn relative_speed_table(timed: &[&EntryReport]) -> String {
    let mean = |r: &EntryReport| r.duration.as_ref().map_or(0.0, |m| m.mean_ns);

    let mut sorted = timed.to_vec();
    sorted.sort_by(|a, b| mean(*a).total_cmp(&mean(*b)));

    let fastest = sorted.first().map_or(1.0, |r| mean(*r));
    let width = sorted.iter().map(|r| r.id.len()).max().unwrap_or(12);

    let mut table = format!("  {:<width$}  {:>12}  {:>10}\n", "Entry", "mean", "vs fastest");
    table.push_str(&format!("  {}\n", "-".repeat(width + 26)));
    for entry in sorted {
        table.push_str(&format!(
            "  {:<width$}  {:>12}  {:>9.2}x\n",
            entry.id,
            format_duration(mean(entry)),
            mean(entry) / fastest
        ));
    }
    table
}

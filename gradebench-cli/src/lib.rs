#![warn(missing_docs)]
//! Gradebench CLI Library
//!
//! Command-line harness around the grade-average strategies. Use
//! `gradebench::run()` (or `gradebench_cli::run()`) in a main function to get
//! the full CLI: suite selection, regex filtering, repeated runs and reports.
//!
//! # Example
//!
//! ```ignore
//! fn main() {
//!     if let Err(e) = gradebench_cli::run() {
//!         eprintln!("Error: {e}");
//!         std::process::exit(1);
//!     }
//! }
//! ```

mod config;
mod executor;
mod planner;

pub use config::*;
pub use executor::{
    EntryExecutionResult, EntryStatistics, ExecutionConfig, Executor, build_report,
    compute_statistics, format_human_output,
};
pub use planner::{ExecutionPlan, build_plan};

use clap::{Parser, Subcommand};
use gradebench_report::{EntryStatus, OutputFormat, ReportConfig, generate_json_report};
use gradebench_school::{Classroom, EntryKind, Strategy, Suite};
use regex::Regex;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Gradebench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "gradebench")]
#[command(
    author,
    version,
    about = "Gradebench - one class average, six control-flow styles, timed"
)]
pub struct Cli {
    /// Optional subcommand (List, Run, Init); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Filter entries by regex pattern on their id
    #[arg(default_value = ".*")]
    pub filter: String,

    /// Suite to run: report-card, team, slow-team, allocation
    #[arg(long, default_value = "report-card")]
    pub suite: String,

    /// Students per strategy (overrides gradebench.toml)
    #[arg(long)]
    pub students: Option<u64>,

    /// Students for the channeling strategy (overrides gradebench.toml)
    #[arg(long)]
    pub channeling_students: Option<u64>,

    /// Run the recursive and tail-recursive strategies, which overflow the stack at full size
    #[arg(long)]
    pub allow_overflow: bool,

    /// Runs per entry; more than one prints a summary report
    #[arg(long, short = 'n')]
    pub repeat: Option<u32>,

    /// Report format: human, json
    #[arg(long)]
    pub format: Option<String>,

    /// Report file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (default: discover gradebench.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the planned entries of the selected suite
    List,
    /// Run the selected suite (default)
    Run,
    /// Print a default gradebench.toml
    Init,
}

/// Run the Gradebench CLI with the process arguments.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if setup fails or any entry failed.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the Gradebench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Init) => {
            print!("{}", GradeConfig::default_toml());
            Ok(())
        }
        Some(Commands::List) => {
            let config = resolve_config(&cli)?;
            list_entries(&cli, &config)
        }
        Some(Commands::Run) | None => {
            let config = resolve_config(&cli)?;
            run_suite(&cli, &config)
        }
    }
}

/// Events go to stderr so headlines on stdout stay clean. `RUST_LOG` wins
/// over `--verbose`.
fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "gradebench=debug"
    } else {
        "gradebench=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    // already installed when embedded
    let _ = if verbose {
        builder.try_init()
    } else {
        builder.with_level(false).try_init()
    };
}

/// Load configuration (explicit path or discovered) and layer CLI overrides on top.
fn resolve_config(cli: &Cli) -> anyhow::Result<GradeConfig> {
    let mut config = match &cli.config {
        Some(path) => GradeConfig::load(path)?,
        None => match GradeConfig::discover()? {
            Some((path, config)) => {
                tracing::debug!("loaded {}", path.display());
                config
            }
            None => GradeConfig::default(),
        },
    };

    if let Some(students) = cli.students {
        config.population.students = students;
    }
    if let Some(students) = cli.channeling_students {
        config.population.channeling_students = students;
    }
    if cli.allow_overflow {
        config.runner.allow_overflow = true;
    }
    if let Some(repeat) = cli.repeat {
        config.runner.repeat = repeat;
    }
    if let Some(format) = &cli.format {
        config.output.format = format.clone();
    }

    if config.runner.repeat == 0 {
        return Err(anyhow::anyhow!("repeat must be at least 1"));
    }

    Ok(config)
}

fn plan_suite(cli: &Cli, config: &GradeConfig) -> anyhow::Result<(Suite, ExecutionPlan)> {
    let suite: Suite = cli.suite.parse()?;
    let filter = Regex::new(&cli.filter)
        .map_err(|e| anyhow::anyhow!("Invalid filter '{}': {}", cli.filter, e))?;

    let plan = build_plan(suite.entries(), Some(&filter), config.runner.allow_overflow);
    tracing::debug!(
        suite = %suite,
        planned = plan.entries.len(),
        skipped = plan.skipped.len(),
        "plan built"
    );
    Ok((suite, plan))
}

fn list_entries(cli: &Cli, config: &GradeConfig) -> anyhow::Result<()> {
    let (suite, plan) = plan_suite(cli, config)?;

    println!("Gradebench Plan ({}):", suite);
    for entry in &plan.entries {
        println!("├── {:<18} {}", entry.id, entry.label);
    }
    for entry in &plan.skipped {
        println!(
            "├── {:<18} {} [needs --allow-overflow]",
            entry.id, entry.label
        );
    }
    println!(
        "{} entries planned, {} held back.",
        plan.entries.len(),
        plan.skipped.len()
    );

    Ok(())
}

fn run_suite(cli: &Cli, config: &GradeConfig) -> anyhow::Result<()> {
    let (suite, plan) = plan_suite(cli, config)?;
    if plan.is_empty() {
        println!("No entries match '{}' in suite {}.", cli.filter, suite);
        return Ok(());
    }

    let format: OutputFormat = config
        .output
        .format
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;
    let workload = config.workload()?;
    let catalog = Arc::new(config.skill_catalog()?);
    let repeat = config.runner.repeat;

    // only the channeling strategy spawns tasks
    let needs_runtime = plan
        .entries
        .iter()
        .any(|e| e.kind == EntryKind::Strategy(Strategy::Channeling));
    let runtime = if needs_runtime {
        let mut builder = tokio::runtime::Builder::new_multi_thread();
        if config.runner.worker_threads > 0 {
            builder.worker_threads(config.runner.worker_threads);
        }
        let runtime = builder
            .enable_all()
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to start async runtime: {}", e))?;
        tracing::debug!("async runtime started");
        Some(runtime)
    } else {
        None
    };

    let mut classroom = Classroom::new(catalog);
    if let Some(runtime) = &runtime {
        classroom = classroom.with_runtime(runtime.handle().clone());
    }

    let start_time = Instant::now();
    let executor = Executor::new(&classroom, workload, ExecutionConfig { repeat });
    let results = executor.execute(&plan);
    let total_duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    let wants_report =
        cli.format.is_some() || cli.output.is_some() || repeat > 1 || format != OutputFormat::Human;
    if wants_report {
        let stats = compute_statistics(&results);
        let report_config = ReportConfig {
            suite: suite.id().to_string(),
            students: workload.students.get(),
            channeling_students: workload.channeling_students.get(),
            repeat,
            allow_overflow: config.runner.allow_overflow,
        };
        let report = build_report(&results, &stats, report_config, total_duration_ms);

        let output = match format {
            OutputFormat::Json => generate_json_report(&report)?,
            OutputFormat::Human => format_human_output(&report),
        };

        if let Some(ref path) = cli.output {
            let mut file = std::fs::File::create(path)
                .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", path.display(), e))?;
            file.write_all(output.as_bytes())?;
            println!("Report written to: {}", path.display());
        } else {
            print!("{}", output);
        }
    }

    let failed: Vec<&str> = results
        .iter()
        .filter(|r| r.status == EntryStatus::Failed)
        .map(|r| r.entry_id.as_str())
        .collect();
    if !failed.is_empty() {
        return Err(anyhow::anyhow!("{} entry(s) failed: {}", failed.len(), failed.join(", ")));
    }

    Ok(())
}

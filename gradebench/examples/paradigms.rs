//! Paradigms Example
//!
//! Builds the report-card comparison by hand instead of through the CLI: one
//! runner per strategy, each wrapped with the timing monitor, run in the order
//! the harness uses. Ten thousand students keep the recursive strategies well
//! inside the main thread's stack.
//!
//! Run with: cargo run --example paradigms -p gradebench --release

use gradebench::prelude::*;
use gradebench::{Recorder, monitor_into};
use std::sync::Arc;

const STUDENTS: u64 = 10_000;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("gradebench=info")
        .with_writer(std::io::stderr)
        .init();

    let runtime = tokio::runtime::Runtime::new()?;
    let classroom =
        Classroom::new(Arc::new(SkillCatalog::default())).with_runtime(runtime.handle().clone());
    let population = Population::new(STUDENTS)?;
    let timings = Recorder::new();

    for strategy in Strategy::ALL {
        let room = classroom.clone();
        let base = RunnerFn::new(move || {
            match room.class_average(strategy, population, RandomGrader::from_entropy()) {
                Ok(avg) => println!("Final Class Average: {avg}"),
                Err(e) => tracing::error!("{strategy} failed: {e}"),
            }
        });
        decorate(Box::new(base), [monitor_into(strategy.id(), timings.clone())]).run();
    }

    let mut ranked = timings.take();
    ranked.sort_by_key(|t| t.elapsed);
    println!();
    for timing in ranked {
        println!("{:<16} {:?}", timing.label, timing.elapsed);
    }

    Ok(())
}

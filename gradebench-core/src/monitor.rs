//! Timing Monitor
//!
//! `monitor(label)` produces a decorator that times the wrapped runner and logs
//! `"<label> took <duration>"` once it returns. Nothing is caught: if the wrapped
//! runner dies (stack overflow, panic) the line for that run is never written.

use crate::measure::Timer;
use crate::recorder::Recorder;
use crate::runner::{Decorator, Runner, RunnerFn};
use std::time::Duration;

/// One timed execution of a monitored runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timing {
    /// Label the monitor was created with
    pub label: String,
    /// Wall-clock time spent in the wrapped runner
    pub elapsed: Duration,
    /// Cycles spent in the wrapped runner (0 without a cycle counter)
    pub cycles: u64,
}

/// Decorator that logs how long the wrapped runner took.
pub fn monitor(label: impl Into<String>) -> Decorator {
    timed(label.into(), None)
}

/// Like [`monitor`], also pushing each [`Timing`] into `recorder`.
pub fn monitor_into(label: impl Into<String>, recorder: Recorder<Timing>) -> Decorator {
    timed(label.into(), Some(recorder))
}

fn timed(label: String, recorder: Option<Recorder<Timing>>) -> Decorator {
    Box::new(move |inner: Box<dyn Runner>| {
        let label = label.clone();
        let recorder = recorder.clone();
        Box::new(RunnerFn::new(move || {
            let timer = Timer::start();
            inner.run();
            let elapsed = timer.stop();

            tracing::info!("{} took {:?}", label, elapsed.duration);

            if let Some(recorder) = &recorder {
                recorder.push(Timing {
                    label: label.clone(),
                    elapsed: elapsed.duration,
                    cycles: elapsed.cycles,
                });
            }
        })) as Box<dyn Runner>
    })
}

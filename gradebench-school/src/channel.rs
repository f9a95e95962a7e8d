//! Task-Chained Recursion
//!
//! Emulates tail recursion without growing the stack: each step does its own
//! work, then spawns the next step as a fresh task and returns. The running
//! total travels down the chain as an argument, and a single oneshot channel,
//! moved from step to step, carries the final total back to the caller.
//!
//! ```text
//! caller ── step(0) ─spawn─► step(1) ─spawn─► ... ─spawn─► step(bound)
//!   ▲                                                         │
//!   └────────────────────── oneshot(total) ◄──────────────────┘
//! ```
//!
//! The terminal step sends and returns without spawning, so exactly one value
//! is delivered and no task outlives the chain.

use crate::error::SchoolError;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::runtime::Handle;
use tokio::sync::oneshot;

/// What a finished chain delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainOutcome {
    /// Running total received from the terminal step
    pub total: u64,
    /// Steps executed, the terminal step included
    pub steps: u64,
}

struct Chain<F> {
    bound: u64,
    score: F,
    steps: AtomicU64,
}

/// Sum `score()` over `bound` steps, one spawned task per step.
///
/// The root step runs on the calling thread; every later step runs as a task
/// on `runtime`. Blocks until the terminal step delivers the total.
pub fn chain_total<F>(runtime: &Handle, bound: u64, score: F) -> Result<ChainOutcome, SchoolError>
where
    F: Fn() -> u64 + Send + Sync + 'static,
{
    let chain = Arc::new(Chain {
        bound,
        score,
        steps: AtomicU64::new(0),
    });
    let (result_tx, result_rx) = oneshot::channel();

    {
        let _entered = runtime.enter();
        step(Arc::clone(&chain), 0, 0, result_tx);
    }

    // Err only if a step panicked and dropped the sender
    let total = runtime
        .block_on(result_rx)
        .map_err(|_| SchoolError::ChainBroken)?;

    Ok(ChainOutcome {
        total,
        steps: chain.steps.load(Ordering::Acquire),
    })
}

fn step<F>(chain: Arc<Chain<F>>, index: u64, running: u64, result: oneshot::Sender<u64>)
where
    F: Fn() -> u64 + Send + Sync + 'static,
{
    chain.steps.fetch_add(1, Ordering::AcqRel);

    if index >= chain.bound {
        // the caller is blocked on the receiver, so this cannot fail
        let _ = result.send(running);
        return;
    }

    let score = (chain.score)();
    tokio::spawn(async move { step(chain, index + 1, running + score, result) });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .unwrap()
    }

    #[test]
    fn test_constant_score_delivers_once() {
        let rt = runtime();
        let outcome = chain_total(rt.handle(), 3, || 10).unwrap();

        assert_eq!(outcome.total, 30);
        // steps 0, 1, 2 score; step 3 delivers; nothing runs past it
        assert_eq!(outcome.steps, 4);
    }

    #[test]
    fn test_zero_bound_delivers_from_root() {
        let rt = runtime();
        let outcome = chain_total(rt.handle(), 0, || 10).unwrap();
        assert_eq!(outcome, ChainOutcome { total: 0, steps: 1 });
    }

    #[test]
    fn test_long_chain_does_not_grow_stack() {
        let rt = runtime();
        let outcome = chain_total(rt.handle(), 100_000, || 1).unwrap();
        assert_eq!(outcome.total, 100_000);
        assert_eq!(outcome.steps, 100_001);
    }

    #[test]
    fn test_panicking_step_breaks_chain() {
        let rt = runtime();
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);
        let result = chain_total(rt.handle(), 5, move || {
            if flag.swap(true, Ordering::SeqCst) {
                panic!("second step fails");
            }
            1
        });

        assert_eq!(result, Err(SchoolError::ChainBroken));
    }
}

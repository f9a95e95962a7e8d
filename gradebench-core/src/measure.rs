//! High-Precision Timing
//!
//! Wall-clock time comes from `std::time::Instant`. Alongside it, the raw cycle
//! counter is sampled (RDTSCP on x86_64, CNTVCT_EL0 on AArch64) so a timed run
//! can also report how many ticks it consumed.

use std::time::{Duration, Instant};

#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn read_cycles() -> u64 {
    // SAFETY: RDTSCP is available on all x86_64 CPUs since ~2006 and has no
    // memory side effects.
    unsafe {
        let mut _aux: u32 = 0;
        std::arch::x86_64::__rdtscp(&mut _aux)
    }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn read_cycles() -> u64 {
    let cnt: u64;
    // SAFETY: CNTVCT_EL0 is readable from EL0 on all AArch64 implementations.
    unsafe {
        std::arch::asm!("mrs {}, cntvct_el0", out(reg) cnt, options(nostack, nomem));
    }
    cnt
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
fn read_cycles() -> u64 {
    0
}

/// Whether this platform provides real cycle counters.
pub const HAS_CYCLE_COUNTER: bool = cfg!(target_arch = "x86_64") || cfg!(target_arch = "aarch64");

/// Elapsed wall-clock time and cycle count of a timed section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    /// Monotonic wall-clock duration
    pub duration: Duration,
    /// Cycles consumed (0 where no cycle counter exists)
    pub cycles: u64,
}

/// Timer started before a runner executes and stopped after it returns
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
    cycles_start: u64,
}

impl Timer {
    /// Start a new timer
    #[inline(always)]
    pub fn start() -> Self {
        let cycles_start = read_cycles();
        Self {
            start: Instant::now(),
            cycles_start,
        }
    }

    /// Read elapsed time and cycles since `start`
    #[inline(always)]
    pub fn stop(&self) -> Elapsed {
        let duration = self.start.elapsed();
        let cycles = read_cycles().saturating_sub(self.cycles_start);
        Elapsed { duration, cycles }
    }
}

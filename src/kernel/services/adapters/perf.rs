//! Per-thread timing of hot completion paths.
//!
//! Compiled to no-ops unless the `perf` feature is enabled.

use std::time::Duration;

#[cfg(feature = "perf")]
use rustc_hash::FxHashMap;
#[cfg(feature = "perf")]
use std::cell::RefCell;
#[cfg(feature = "perf")]
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerfSample {
    pub label: &'static str,
    pub count: u64,
    pub total: Duration,
    pub max: Duration,
}

impl PerfSample {
    pub fn average(&self) -> Duration {
        if self.count == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.total.as_secs_f64() / self.count as f64)
    }
}

#[cfg(feature = "perf")]
thread_local! {
    static SAMPLES: RefCell<FxHashMap<&'static str, PerfSample>> =
        RefCell::new(FxHashMap::default());
}

/// Guard that records its lifetime under `label` when dropped.
#[must_use]
pub struct Scope {
    #[cfg(feature = "perf")]
    label: &'static str,
    #[cfg(feature = "perf")]
    start: Instant,
}

#[inline]
pub fn scope(label: &'static str) -> Scope {
    #[cfg(feature = "perf")]
    {
        Scope {
            label,
            start: Instant::now(),
        }
    }
    #[cfg(not(feature = "perf"))]
    {
        let _ = label;
        Scope {}
    }
}

#[cfg(feature = "perf")]
impl Drop for Scope {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        SAMPLES.with(|samples| {
            let mut samples = samples.borrow_mut();
            let sample = samples.entry(self.label).or_insert(PerfSample {
                label: self.label,
                count: 0,
                total: Duration::ZERO,
                max: Duration::ZERO,
            });
            sample.count += 1;
            sample.total += elapsed;
            sample.max = sample.max.max(elapsed);
        });
    }
}

/// Samples recorded on this thread, slowest total first.
pub fn snapshot() -> Vec<PerfSample> {
    #[cfg(feature = "perf")]
    {
        let mut out: Vec<PerfSample> =
            SAMPLES.with(|samples| samples.borrow().values().copied().collect());
        out.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.label.cmp(b.label)));
        out
    }

    #[cfg(not(feature = "perf"))]
    {
        Vec::new()
    }
}

pub fn reset() {
    #[cfg(feature = "perf")]
    {
        SAMPLES.with(|samples| samples.borrow_mut().clear());
    }
}

/// Emits one debug event per sample and clears the table.
pub fn log_and_reset() {
    for sample in snapshot() {
        tracing::debug!(
            label = sample.label,
            count = sample.count,
            total_us = sample.total.as_micros() as u64,
            avg_us = sample.average().as_micros() as u64,
            max_us = sample.max.as_micros() as u64,
            "perf"
        );
    }
    reset();
}

//! Throttle gate for UI actions.
//!
//! Wraps an action so it executes at most once per interval. Calls that
//! arrive too early are dropped, never queued. The gate is meant for a
//! single UI thread: state lives in a [`Cell`] and nothing is locked.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of "now" for the gate.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by [`Instant::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A gated action.
///
/// [`Throttle::call`] runs the action when at least `interval` has passed
/// since the last call that ran (the first call always runs).
pub struct Throttle<F> {
    action: F,
    interval: Duration,
    last_run: Cell<Option<Instant>>,
    clock: Rc<dyn Clock>,
}

impl<F, R> Throttle<F>
where
    F: Fn() -> R,
{
    /// Gate `action` behind `interval`, timed by the system clock.
    pub fn new(action: F, interval: Duration) -> Self {
        Self::with_clock(action, interval, Rc::new(SystemClock))
    }

    /// Gate `action` behind `interval`, timed by `clock`.
    pub fn with_clock(action: F, interval: Duration, clock: Rc<dyn Clock>) -> Self {
        Self {
            action,
            interval,
            last_run: Cell::new(None),
            clock,
        }
    }

    /// Invoke the gated action.
    ///
    /// Returns `Some` with the action's result when it ran, `None` when the
    /// call was dropped.
    pub fn call(&self) -> Option<R> {
        let now = self.clock.now();
        if let Some(last) = self.last_run.get() {
            if now.saturating_duration_since(last) < self.interval {
                tracing::debug!(
                    since_last_ms = now.saturating_duration_since(last).as_millis() as u64,
                    interval_ms = self.interval.as_millis() as u64,
                    "throttled call dropped"
                );
                return None;
            }
        }
        self.last_run.set(Some(now));
        Some((self.action)())
    }

    /// The minimum time between two executed calls.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl<F> std::fmt::Debug for Throttle<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Throttle")
            .field("interval", &self.interval)
            .field("last_run", &self.last_run.get())
            .finish_non_exhaustive()
    }
}

/// Clock that only moves when told to. Used by tests across the crate.
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(Instant::now()),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

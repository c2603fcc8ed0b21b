// Time management for anytime search
//
// The search never owns the clock. It polls a `TimeSource` through a
// `TimeGovernor`, which applies two fixed margins: one below which a running
// search must stop descending, and one below which no new deepening
// iteration is started.

use std::cell::Cell;
use std::time::{Duration, Instant};

use crate::config::TimingConfig;

/// Anything that can report the milliseconds left before the move is due
pub trait TimeSource {
    fn remaining_ms(&self) -> u64;
}

/// Plain probes such as `|| time_left_ms` act as time sources
impl<F> TimeSource for F
where
    F: Fn() -> u64,
{
    fn remaining_ms(&self) -> u64 {
        self()
    }
}

/// Absolute expiry instant
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expires_at: Instant,
}

impl Deadline {
    pub fn at(expires_at: Instant) -> Self {
        Deadline { expires_at }
    }

    /// Deadline `budget` from now
    pub fn after(budget: Duration) -> Self {
        Deadline {
            expires_at: Instant::now() + budget,
        }
    }
}

impl TimeSource for Deadline {
    fn remaining_ms(&self) -> u64 {
        self.expires_at
            .saturating_duration_since(Instant::now())
            .as_millis() as u64
    }
}

/// Deterministic fake clock: every poll reports the current budget and then
/// spends `step_ms` of it
#[derive(Debug)]
pub struct SteppedClock {
    remaining: Cell<u64>,
    step_ms: u64,
}

impl SteppedClock {
    pub fn new(start_ms: u64, step_ms: u64) -> Self {
        SteppedClock {
            remaining: Cell::new(start_ms),
            step_ms,
        }
    }

    /// A clock that never runs down
    pub fn unlimited() -> Self {
        Self::new(u64::MAX, 0)
    }

    /// Budget left without consuming a poll
    pub fn peek(&self) -> u64 {
        self.remaining.get()
    }
}

impl TimeSource for SteppedClock {
    fn remaining_ms(&self) -> u64 {
        let now = self.remaining.get();
        self.remaining.set(now.saturating_sub(self.step_ms));
        now
    }
}

/// Polling check against a time source with fixed safety margins
pub struct TimeGovernor<'a> {
    source: &'a dyn TimeSource,
    safety_margin_ms: u64,
    iteration_margin_ms: u64,
}

impl<'a> TimeGovernor<'a> {
    pub fn new(source: &'a dyn TimeSource, timing: &TimingConfig) -> Self {
        TimeGovernor {
            source,
            safety_margin_ms: timing.safety_margin_ms,
            iteration_margin_ms: timing.iteration_margin_ms,
        }
    }

    /// True once a running search must stop descending and fall back to the heuristic
    pub fn is_exhausted(&self) -> bool {
        self.source.remaining_ms() < self.safety_margin_ms
    }

    /// True while there is enough time to start another deepening iteration
    pub fn allows_iteration(&self) -> bool {
        self.source.remaining_ms() > self.iteration_margin_ms
    }

    pub fn remaining_ms(&self) -> u64 {
        self.source.remaining_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing() -> TimingConfig {
        TimingConfig {
            safety_margin_ms: 10,
            iteration_margin_ms: 50,
        }
    }

    #[test]
    fn test_closure_probe_is_a_time_source() {
        let probe = || 42u64;
        let governor = TimeGovernor::new(&probe, &timing());
        assert_eq!(governor.remaining_ms(), 42);
        assert!(!governor.is_exhausted());
        assert!(!governor.allows_iteration());
    }

    #[test]
    fn test_margins() {
        let plenty = || 1_000u64;
        let governor = TimeGovernor::new(&plenty, &timing());
        assert!(governor.allows_iteration());
        assert!(!governor.is_exhausted());

        let nearly_out = || 9u64;
        let governor = TimeGovernor::new(&nearly_out, &timing());
        assert!(governor.is_exhausted());
        assert!(!governor.allows_iteration());
    }

    #[test]
    fn test_stepped_clock_spends_per_poll() {
        let clock = SteppedClock::new(25, 10);
        assert_eq!(clock.remaining_ms(), 25);
        assert_eq!(clock.remaining_ms(), 15);
        assert_eq!(clock.remaining_ms(), 5);
        assert_eq!(clock.remaining_ms(), 0);
        assert_eq!(clock.peek(), 0);
    }

    #[test]
    fn test_expired_deadline_reports_zero() {
        let deadline = Deadline::at(Instant::now());
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(deadline.remaining_ms(), 0);

        let later = Deadline::after(Duration::from_secs(60));
        assert!(later.remaining_ms() > 50_000);
    }
}

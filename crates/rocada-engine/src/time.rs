//! Per-decision countdown clock and time-budget policy.

use std::time::{Duration, Instant};

/// The time budget for the current decision ran out mid-search.
///
/// Propagated out of the recursive search with `?` so that a timed-out
/// node unwinds without storing a meaningless score in the position cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("time budget for this decision is exhausted")]
pub struct OutOfTime;

/// Countdown clock for a single move decision.
///
/// Constructed by the host with the total time remaining on the agent's
/// shared game clock; starts running immediately.
#[derive(Debug, Clone)]
pub struct Clock {
    start: Instant,
    total: Duration,
}

impl Clock {
    /// Start a clock with `total` time remaining on the game clock.
    pub fn new(total: Duration) -> Self {
        Self {
            start: Instant::now(),
            total,
        }
    }

    /// Time elapsed in this decision.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time left on the game clock, saturating at zero.
    pub fn remaining(&self) -> Duration {
        self.total.saturating_sub(self.elapsed())
    }
}

/// How much of the remaining game clock one decision may spend.
///
/// A fixed fraction keeps roughly thirty further moves affordable at any
/// point of the game.
pub fn move_budget(remaining: Duration) -> Duration {
    remaining / 30
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Clock, move_budget};

    #[test]
    fn budget_is_a_thirtieth() {
        assert_eq!(
            move_budget(Duration::from_secs(30)),
            Duration::from_secs(1)
        );
    }

    #[test]
    fn zero_remaining_gives_zero_budget() {
        assert_eq!(move_budget(Duration::ZERO), Duration::ZERO);
    }

    #[test]
    fn remaining_never_underflows() {
        let clock = Clock::new(Duration::ZERO);
        assert_eq!(clock.remaining(), Duration::ZERO);
    }

    #[test]
    fn elapsed_is_monotonic() {
        let clock = Clock::new(Duration::from_secs(1));
        let a = clock.elapsed();
        let b = clock.elapsed();
        assert!(b >= a);
    }
}

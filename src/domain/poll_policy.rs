//! Poll backoff policy value object

use std::time::Duration;

use crate::domain::wait::WaitDuration;

/// Default initial delay between status polls
pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(1);

/// Default backoff multiplier
pub const DEFAULT_MULTIPLIER: f64 = 2.0;

/// Default per-poll delay cap
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(30);

/// Default attempt budget
pub const DEFAULT_MAX_ATTEMPTS: u32 = 30;

/// Rule governing delay growth between successive status polls.
///
/// Whichever bound is reached first (attempt count or elapsed time)
/// terminates the poll loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollPolicy {
    /// Delay before the second poll (the first poll happens immediately)
    pub initial_delay: Duration,
    /// Growth factor applied to the delay after each poll
    pub multiplier: f64,
    /// Upper bound on any single delay
    pub max_delay: Duration,
    /// Hard deadline on total elapsed time
    pub max_elapsed: Duration,
    /// Upper bound on status queries per call
    pub max_attempts: u32,
}

impl PollPolicy {
    /// Policy with the given deadline and attempt budget, default backoff shape
    pub fn new(max_elapsed: Duration, max_attempts: u32) -> Self {
        Self {
            max_elapsed,
            max_attempts,
            ..Self::default()
        }
    }

    /// Next delay after `current`, multiplied and capped at `max_delay`
    pub fn next_delay(&self, current: Duration) -> Duration {
        let grown = current.as_secs_f64() * self.multiplier;
        Duration::from_secs_f64(grown.min(self.max_delay.as_secs_f64()))
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            initial_delay: DEFAULT_INITIAL_DELAY,
            multiplier: DEFAULT_MULTIPLIER,
            max_delay: DEFAULT_MAX_DELAY,
            max_elapsed: WaitDuration::default_max_wait().as_std(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_doubles() {
        let policy = PollPolicy::default();
        let d1 = policy.next_delay(Duration::from_secs(1));
        let d2 = policy.next_delay(d1);
        assert_eq!(d1, Duration::from_secs(2));
        assert_eq!(d2, Duration::from_secs(4));
    }

    #[test]
    fn delay_capped_at_max() {
        let policy = PollPolicy::default();
        let d = policy.next_delay(Duration::from_secs(25));
        assert_eq!(d, DEFAULT_MAX_DELAY);

        let still_capped = policy.next_delay(d);
        assert_eq!(still_capped, DEFAULT_MAX_DELAY);
    }

    #[test]
    fn new_overrides_budgets_only() {
        let policy = PollPolicy::new(Duration::from_secs(60), 10);
        assert_eq!(policy.max_elapsed, Duration::from_secs(60));
        assert_eq!(policy.max_attempts, 10);
        assert_eq!(policy.initial_delay, DEFAULT_INITIAL_DELAY);
        assert_eq!(policy.max_delay, DEFAULT_MAX_DELAY);
    }

    #[test]
    fn default_deadline_is_five_minutes() {
        assert_eq!(PollPolicy::default().max_elapsed, Duration::from_secs(300));
    }
}

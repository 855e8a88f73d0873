use std::time::{Duration, Instant};

/// A one-shot deadline owned by the component whose state it will change.
///
/// The poll loop calls the owner's `tick` with the current instant; the
/// owner checks `is_elapsed` and reacts. Cancellation is dropping or
/// overwriting the countdown, so a deadline can never outlive the state
/// it belongs to and can never be canceled twice.
#[derive(Clone, Copy, Debug)]
pub struct Countdown {
    armed_at: Instant,
    delay: Duration,
}

impl Countdown {
    /// Arms a countdown starting now.
    pub fn start(delay: Duration) -> Self {
        Self::start_at(Instant::now(), delay)
    }

    /// Arms a countdown starting at an explicit instant.
    pub fn start_at(armed_at: Instant, delay: Duration) -> Self {
        Self { armed_at, delay }
    }

    pub fn is_elapsed(&self, now: Instant) -> bool {
        now.duration_since(self.armed_at) >= self.delay
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.delay.saturating_sub(now.duration_since(self.armed_at))
    }
}

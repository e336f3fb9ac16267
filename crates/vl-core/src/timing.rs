//! Delays used by the site's timers

use std::time::Duration;

/// Simulated round trip before a form submission resolves
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(500);

/// How long a notification toast stays up
pub const TOAST_DISMISS: Duration = Duration::from_secs(5);

/// Pause before the first-visit consent banner slides in
pub const CONSENT_REVEAL_DELAY: Duration = Duration::from_secs(1);

/// Wait between "resend reset link" clicks
pub const RESEND_COOLDOWN_SECS: u32 = 60;

pub const COUNTDOWN_TICK: Duration = Duration::from_secs(1);

/// Whole-second countdown gating a repeatable action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn start(&mut self, seconds: u32) {
        self.remaining = seconds;
    }

    /// Advance one second. Returns true on the tick that reaches zero.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.remaining > 0
    }

    pub fn cancel(&mut self) {
        self.remaining = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_runs_to_zero() {
        let mut countdown = Countdown::idle();
        assert!(!countdown.is_running());

        countdown.start(3);
        assert!(!countdown.tick());
        assert!(!countdown.tick());
        assert!(countdown.tick());
        assert!(!countdown.is_running());
        assert!(!countdown.tick());
    }

    #[test]
    fn test_cancel() {
        let mut countdown = Countdown::idle();
        countdown.start(RESEND_COOLDOWN_SECS);
        countdown.tick();
        assert_eq!(countdown.remaining(), RESEND_COOLDOWN_SECS - 1);
        countdown.cancel();
        assert!(!countdown.is_running());
    }
}

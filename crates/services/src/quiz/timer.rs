/// Default quiz length: 30 minutes.
pub const DEFAULT_QUIZ_SECS: u32 = 1800;

/// Remaining time at which the display switches to its warning styling.
/// Presentation only; ticking semantics are unaffected.
pub const WARNING_WINDOW_SECS: u32 = 300;

/// Outcome of consuming one wall-clock second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Still running; carries the remaining seconds.
    Running(u32),
    /// This tick hit zero. Delivered exactly once; the caller finishes the
    /// session on it.
    JustExpired,
    /// A late tick after expiry, e.g. a callback that outlived its
    /// cancellation by a beat. Safe to ignore.
    AlreadyExpired,
}

/// One-way countdown: Running until zero, then Expired forever.
///
/// The repeating one-second schedule lives with the caller (a scoped task in
/// the UI); this type only owns the transition, so the "finish fires once"
/// guarantee is testable without any clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    expired: bool,
}

impl Countdown {
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self {
            remaining: secs,
            expired: secs == 0,
        }
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// True while the remaining time is inside the warning window.
    #[must_use]
    pub fn in_warning_window(&self) -> bool {
        !self.expired && self.remaining < WARNING_WINDOW_SECS
    }

    /// Consumes one elapsed second.
    pub fn tick(&mut self) -> Tick {
        if self.expired {
            return Tick::AlreadyExpired;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.expired = true;
            return Tick::JustExpired;
        }
        Tick::Running(self.remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_and_expires_exactly_once() {
        let mut countdown = Countdown::new(5);
        let mut expirations = 0;

        for _ in 0..5 {
            if countdown.tick() == Tick::JustExpired {
                expirations += 1;
            }
        }
        assert_eq!(countdown.remaining(), 0);
        assert!(countdown.is_expired());
        assert_eq!(expirations, 1);

        // Erroneously delivered late ticks must not re-fire the finish.
        assert_eq!(countdown.tick(), Tick::AlreadyExpired);
        assert_eq!(countdown.tick(), Tick::AlreadyExpired);
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn reports_remaining_while_running() {
        let mut countdown = Countdown::new(3);
        assert_eq!(countdown.tick(), Tick::Running(2));
        assert_eq!(countdown.tick(), Tick::Running(1));
        assert_eq!(countdown.tick(), Tick::JustExpired);
    }

    #[test]
    fn warning_window_is_presentation_only() {
        let mut countdown = Countdown::new(WARNING_WINDOW_SECS + 1);
        assert!(!countdown.in_warning_window());
        countdown.tick();
        assert!(!countdown.in_warning_window());
        countdown.tick();
        assert!(countdown.in_warning_window());
    }

    #[test]
    fn zero_length_countdown_starts_expired() {
        let mut countdown = Countdown::new(0);
        assert!(countdown.is_expired());
        assert_eq!(countdown.tick(), Tick::AlreadyExpired);
    }
}

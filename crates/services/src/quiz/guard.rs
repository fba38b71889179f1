/// Bound on automatic remediation: past this many violations the guard stops
/// re-requesting fullscreen on the respondent's behalf. The count itself
/// keeps growing, the overlay keeps blocking until compliance returns, and
/// nothing escalates further (no forced submission).
pub const VIOLATION_CEILING: u32 = 3;

/// Focus-condition changes reported by the platform event bridge.
///
/// Context-menu, clipboard and devtools shortcuts are suppressed at the
/// bridge itself and never reach the guard; they are blocked, not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEvent {
    FullscreenExited,
    FullscreenRestored,
    TabHidden,
    TabVisible,
}

/// What the UI should do in response to an observed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardEffect {
    /// Show the blocking notice with this message.
    pub notice: Option<&'static str>,
    /// Ask the platform to re-enter fullscreen.
    pub request_fullscreen: bool,
}

impl GuardEffect {
    const NONE: Self = Self {
        notice: None,
        request_fullscreen: false,
    };
}

/// Tracks whether the required focus conditions hold during a quiz run.
///
/// Transient `Violating` episodes clear once the condition is restored; the
/// violation count is monotonic and never resets. Advisory by design: a
/// client that disables the event bridge at the platform level defeats it,
/// and that is an accepted non-goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrityGuard {
    fullscreen: bool,
    visible: bool,
    violations: u32,
}

impl Default for IntegrityGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegrityGuard {
    /// A fresh guard. Fullscreen starts unsatisfied: the bridge requests it
    /// on mount and reports the result back as an event.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fullscreen: false,
            visible: true,
            violations: 0,
        }
    }

    #[must_use]
    pub fn violation_count(&self) -> u32 {
        self.violations
    }

    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.fullscreen && self.visible
    }

    /// Whether quiz content is withheld behind the blocking overlay.
    ///
    /// Blocks for as long as compliance is broken, however high the count;
    /// restoring compliance is the only way out.
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        !self.is_compliant()
    }

    /// Whether automatic fullscreen re-requests have been exhausted. The
    /// first `VIOLATION_CEILING` fullscreen exits each get a re-request;
    /// later ones do not.
    #[must_use]
    pub fn past_ceiling(&self) -> bool {
        self.violations > VIOLATION_CEILING
    }

    /// Folds one focus event into the state machine.
    pub fn observe(&mut self, event: FocusEvent) -> GuardEffect {
        match event {
            FocusEvent::FullscreenExited => {
                self.fullscreen = false;
                self.violations = self.violations.saturating_add(1);
                GuardEffect {
                    notice: Some("The test must be taken in fullscreen mode."),
                    request_fullscreen: !self.past_ceiling(),
                }
            }
            FocusEvent::FullscreenRestored => {
                self.fullscreen = true;
                GuardEffect::NONE
            }
            FocusEvent::TabHidden => {
                self.visible = false;
                self.violations = self.violations.saturating_add(1);
                GuardEffect {
                    notice: Some("Switching tabs is not allowed during the test."),
                    request_fullscreen: false,
                }
            }
            FocusEvent::TabVisible => {
                self.visible = true;
                GuardEffect::NONE
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fullscreen_exits_raise_count_and_keep_blocking() {
        let mut guard = IntegrityGuard::new();

        for expected in 1..=3 {
            let effect = guard.observe(FocusEvent::FullscreenExited);
            assert_eq!(guard.violation_count(), expected);
            assert!(effect.notice.is_some());
        }
        assert_eq!(guard.violation_count(), 3);
        assert!(guard.is_blocking(), "overlay still blocks at the ceiling");

        // A fourth identical event neither resets nor underflows the count.
        guard.observe(FocusEvent::FullscreenExited);
        assert_eq!(guard.violation_count(), 4);
        assert!(guard.is_blocking());
    }

    #[test]
    fn restore_clears_violating_without_touching_count() {
        let mut guard = IntegrityGuard::new();
        guard.observe(FocusEvent::FullscreenRestored);
        assert!(guard.is_compliant());

        guard.observe(FocusEvent::FullscreenExited);
        assert!(!guard.is_compliant());
        assert!(guard.is_blocking());

        guard.observe(FocusEvent::FullscreenRestored);
        assert!(guard.is_compliant());
        assert!(!guard.is_blocking());
        assert_eq!(guard.violation_count(), 1);
    }

    #[test]
    fn tab_hide_counts_but_does_not_request_fullscreen() {
        let mut guard = IntegrityGuard::new();
        guard.observe(FocusEvent::FullscreenRestored);

        let effect = guard.observe(FocusEvent::TabHidden);
        assert_eq!(guard.violation_count(), 1);
        assert!(effect.notice.is_some());
        assert!(!effect.request_fullscreen);
        assert!(guard.is_blocking());

        guard.observe(FocusEvent::TabVisible);
        assert!(!guard.is_blocking());
    }

    #[test]
    fn fullscreen_rerequests_stop_at_the_ceiling() {
        let mut guard = IntegrityGuard::new();
        let mut effects = Vec::new();
        for _ in 0..4 {
            effects.push(guard.observe(FocusEvent::FullscreenExited));
            guard.observe(FocusEvent::FullscreenRestored);
        }
        let requests: Vec<_> = effects.iter().map(|e| e.request_fullscreen).collect();
        assert_eq!(requests, [true, true, true, false]);
    }

    #[test]
    fn count_is_monotonic_across_mixed_events() {
        let mut guard = IntegrityGuard::new();
        guard.observe(FocusEvent::FullscreenRestored);
        guard.observe(FocusEvent::TabHidden);
        guard.observe(FocusEvent::TabVisible);
        guard.observe(FocusEvent::FullscreenExited);
        guard.observe(FocusEvent::FullscreenRestored);
        assert_eq!(guard.violation_count(), 2);
    }
}

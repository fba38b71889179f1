/// RAII handle for a monitoring resource (a ticking task, an event bridge).
///
/// Whoever starts the resource hands back a `Subscription` wrapping its
/// release action. The action runs exactly once, on explicit `release()` or
/// on drop, so teardown happens on every exit path of the owning scope and a
/// dangling callback cannot outlive the session view.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release. Useful when monitoring could
    /// not be started but the owning scope still wants a handle to hold.
    #[must_use]
    pub fn noop() -> Self {
        Self { release: None }
    }

    /// Releases the resource now instead of at drop.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("released", &self.release.is_none())
            .finish()
    }
}

//! Progress notification around remote calls.
//!
//! The core announces long-running fetches through [`Progress`]; the CLI plugs
//! in a terminal spinner. Notifications are side effects only and never change
//! what an operation does or returns.

/// Receives start/stop notifications for long-running steps.
pub trait Progress {
    /// A step labelled `label` started.
    fn start(&self, label: &str);

    /// The current step finished, successfully or not.
    fn stop(&self);
}

/// A notifier that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Progress for Silent {
    fn start(&self, _label: &str) {}

    fn stop(&self) {}
}

/// Scoped progress step; stops the notifier when dropped, including on early
/// return through `?`.
#[must_use = "the step stops as soon as the guard is dropped"]
pub struct Step<'a> {
    progress: &'a dyn Progress,
}

impl<'a> Step<'a> {
    pub fn start(progress: &'a dyn Progress, label: &str) -> Self {
        progress.start(label);
        Self { progress }
    }
}

impl Drop for Step<'_> {
    fn drop(&mut self) {
        self.progress.stop();
    }
}

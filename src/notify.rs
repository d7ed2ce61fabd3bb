//! User notification capability
//!
//! When `show_alerts` is on, the controller hands the failing message to a
//! [`Notifier`]. A browser host would show a blocking alert; the engine does
//! not care, it only waits for `notify` to return.

/// Surfaces an error message to the user.
pub trait Notifier: Send + Sync {
    /// Show `message`. May block until the user dismisses it.
    fn notify(&self, message: &str);
}

impl<F> Notifier for F
where
    F: Fn(&str) + Send + Sync,
{
    fn notify(&self, message: &str) {
        self(message)
    }
}

/// Notifier that drops every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _message: &str) {}
}

/// Notifier that emits each message as a `warn` event.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

#[cfg(feature = "tracing")]
impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!(alert = message, "validation alert");
    }
}

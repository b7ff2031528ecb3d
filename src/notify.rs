//! Transient success/error presentation.
//!
//! At most one notification is visible at a time. Acknowledging either
//! kind re-triggers the current view's load transition (the dashboard
//! convention: dismissal means "refresh the data", not just "hide the
//! banner"). Timed toasts expire on their own without forcing a reload.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Success(String),
    Error(String),
}

impl Notification {
    pub fn message(&self) -> &str {
        match self {
            Notification::Success(m) | Notification::Error(m) => m,
        }
    }
}

/// What the view must do after an explicit dismissal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DismissAction {
    /// Re-run the list controller's load transition.
    ReloadData,
}

#[derive(Debug, Default)]
pub struct Notifier {
    current: Option<Notification>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a success, displacing any visible notification.
    pub fn success(&mut self, message: impl Into<String>) {
        self.current = Some(Notification::Success(message.into()));
    }

    /// Show an error, displacing any visible notification.
    pub fn error(&mut self, message: impl Into<String>) {
        self.current = Some(Notification::Error(message.into()));
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Explicit user acknowledgment. Returns the follow-up action when
    /// something was actually visible.
    pub fn dismiss(&mut self) -> Option<DismissAction> {
        self.current.take().map(|_| DismissAction::ReloadData)
    }
}

/// Auto-dismissing toast lifetime.
pub const TOAST_TTL: Duration = Duration::from_secs(3);

/// A timed toast: shown immediately, gone after [`TOAST_TTL`] with no
/// data reload.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    shown_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= TOAST_TTL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_notification_at_a_time() {
        let mut notifier = Notifier::new();
        notifier.success("saved");
        notifier.error("boom");
        assert_eq!(notifier.current(), Some(&Notification::Error("boom".into())));
    }

    #[test]
    fn dismissal_requests_a_reload() {
        let mut notifier = Notifier::new();
        notifier.success("saved");
        assert_eq!(notifier.dismiss(), Some(DismissAction::ReloadData));
        assert_eq!(notifier.dismiss(), None);
        assert!(notifier.current().is_none());
    }

    #[test]
    fn toast_expires_after_ttl() {
        let toast = Toast::new("saved");
        let now = Instant::now();
        assert!(!toast.is_expired(now));
        assert!(toast.is_expired(now + TOAST_TTL));
    }
}

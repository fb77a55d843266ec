//! Toast notification state consumed through a fire-and-forget `add`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any component may queue a toast; the `ToastStack` component renders the
//! queue and handles dismissal. Callers never consume a return value.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use uuid::Uuid;

/// Visual severity of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warn,
    Error,
}

impl Severity {
    /// CSS modifier class for the toast card.
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Success => "toast--success",
            Severity::Info => "toast--info",
            Severity::Warn => "toast--warn",
            Severity::Error => "toast--error",
        }
    }
}

/// A single queued toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Unique toast identifier (UUID string), used as the render key.
    pub id: String,
    pub severity: Severity,
    /// Short heading, e.g. `"Error"`.
    pub summary: String,
    /// Full user-facing message.
    pub detail: String,
}

/// Queued toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
}

impl NotificationsState {
    /// Queue a toast.
    pub fn add(&mut self, severity: Severity, summary: &str, detail: &str) {
        self.items.push(Notification {
            id: Uuid::new_v4().to_string(),
            severity,
            summary: summary.to_owned(),
            detail: detail.to_owned(),
        });
    }

    /// Drop the toast with `id`, if still queued.
    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|notification| notification.id != id);
    }
}

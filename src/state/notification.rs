//! Transient status notifications (toasts)

use std::time::Duration;
use tokio::time::Instant;

/// Default notification lifetime (3.5 seconds)
pub const DEFAULT_LIFETIME: Duration = Duration::from_millis(3500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

/// Holds at most one notification and clears it once its deadline passes.
///
/// A new notification replaces the current one and restarts the deadline.
#[derive(Debug)]
pub struct NotificationEmitter {
    current: Option<(Notification, Instant)>,
    lifetime: Duration,
}

impl NotificationEmitter {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            current: None,
            lifetime,
        }
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.notify_at(message, severity, Instant::now());
    }

    pub fn notify_at(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        let notification = Notification {
            message: message.into(),
            severity,
        };
        tracing::debug!(message = %notification.message, ?severity, "notification shown");
        self.current = Some((notification, now + self.lifetime));
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref().map(|(n, _)| n)
    }

    /// Clear the notification if its deadline has passed.
    /// Returns true if something was cleared.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.current {
            Some((_, deadline)) if now >= deadline => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

impl Default for NotificationEmitter {
    fn default() -> Self {
        Self::new(DEFAULT_LIFETIME)
    }
}

//! Scoped guarantee that a pending submission always resolves

use super::events::FormEvent;
use super::form_session::FormSession;
use crate::state::SubmissionOutcome;
use tokio::sync::mpsc::UnboundedSender;

/// Outcome recorded when a submission is dropped before it finishes
pub const INTERRUPTED_MESSAGE: &str = "Submission was interrupted before a response was received";

/// Destination for the terminal outcome of a submission
pub trait OutcomeSink {
    fn deliver(&mut self, outcome: SubmissionOutcome);
}

impl OutcomeSink for &mut FormSession {
    fn deliver(&mut self, outcome: SubmissionOutcome) {
        self.complete_submit(outcome);
    }
}

impl OutcomeSink for UnboundedSender<FormEvent> {
    fn deliver(&mut self, outcome: SubmissionOutcome) {
        if self.send(FormEvent::SubmissionFinished(outcome)).is_err() {
            tracing::debug!("Form session is gone; dropping submission outcome");
        }
    }
}

/// Held for the duration of the network step.
///
/// Resolving delivers the real outcome; dropping it unresolved (the future
/// was cancelled or the task panicked) delivers a `NetworkError` instead, so
/// the session never stays Pending.
pub struct PendingGuard<S: OutcomeSink> {
    sink: S,
    resolved: bool,
}

impl<S: OutcomeSink> PendingGuard<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            resolved: false,
        }
    }

    pub fn resolve(mut self, outcome: SubmissionOutcome) {
        self.resolved = true;
        self.sink.deliver(outcome);
    }
}

impl<S: OutcomeSink> Drop for PendingGuard<S> {
    fn drop(&mut self) {
        if !self.resolved {
            tracing::warn!("Pending submission dropped without an outcome");
            self.sink.deliver(SubmissionOutcome::NetworkError {
                message: INTERRUPTED_MESSAGE.to_string(),
            });
        }
    }
}

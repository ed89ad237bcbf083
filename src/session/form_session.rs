//! State owned by one payment form instance and its transitions

use super::events::FormEvent;
use crate::api::PaymentPayload;
use crate::state::{
    validate, ErrorState, Field, FormState, Notification, NotificationEmitter, ResponseBody,
    Severity, SubmissionOutcome, Validation,
};
use std::time::Duration;

pub const SUBMITTED_MESSAGE: &str = "Payment submitted ✓";
pub const UNREACHABLE_MESSAGE: &str = "Could not reach API";

/// Form values, field errors, submission outcome and notification for a
/// single form. Mutated only through its own methods.
#[derive(Debug)]
pub struct FormSession {
    form: FormState,
    errors: ErrorState,
    outcome: SubmissionOutcome,
    notifications: NotificationEmitter,
}

impl FormSession {
    pub fn new(notification_lifetime: Duration) -> Self {
        Self {
            form: FormState::new(),
            errors: ErrorState::new(),
            outcome: SubmissionOutcome::Idle,
            notifications: NotificationEmitter::new(notification_lifetime),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    pub fn is_pending(&self) -> bool {
        self.outcome.is_pending()
    }

    /// Process a single event.
    ///
    /// Returns the payload to send when the event starts a submission.
    pub fn handle(&mut self, event: FormEvent) -> Option<PaymentPayload> {
        match event {
            FormEvent::FieldChanged(field, raw) => {
                self.field_changed(field, &raw);
                None
            }
            FormEvent::SubmitRequested => self.begin_submit(),
            FormEvent::SubmissionFinished(outcome) => {
                self.complete_submit(outcome);
                None
            }
            FormEvent::Reset => {
                self.reset();
                None
            }
            FormEvent::Tick(now) => {
                self.notifications.expire(now);
                None
            }
        }
    }

    /// Store normalized input and drop the field's stale error
    pub fn field_changed(&mut self, field: Field, raw: &str) {
        self.form.set(field, raw);
        self.errors.clear_field(field);
    }

    /// Validate and, if the form is valid, move to Pending.
    ///
    /// Returns `None` without touching the outcome when the form is invalid
    /// or a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<PaymentPayload> {
        if self.outcome.is_pending() {
            tracing::warn!("Submit ignored: a submission is already pending");
            return None;
        }

        let Validation { errors, is_valid } = validate(&self.form);
        self.errors = errors;
        if !is_valid {
            tracing::debug!("Submit blocked by validation errors");
            return None;
        }

        self.outcome = SubmissionOutcome::Pending;
        Some(PaymentPayload::from_form(&self.form))
    }

    /// Record the terminal outcome of the pending submission and notify.
    pub fn complete_submit(&mut self, outcome: SubmissionOutcome) {
        if !self.outcome.is_pending() {
            tracing::warn!("Discarding submission outcome: nothing is pending");
            return;
        }

        let outcome = match outcome {
            SubmissionOutcome::Idle | SubmissionOutcome::Pending => {
                tracing::warn!("Submission finished without a terminal outcome");
                SubmissionOutcome::NetworkError {
                    message: "Submission ended without a response".to_string(),
                }
            }
            terminal => terminal,
        };

        match &outcome {
            SubmissionOutcome::Succeeded { status, .. } => {
                tracing::info!(status, "Payment accepted");
                self.notifications.notify(SUBMITTED_MESSAGE, Severity::Ok);
            }
            SubmissionOutcome::Failed { status, body } => {
                tracing::warn!(status, "Payment rejected");
                self.merge_server_field_errors(body);
                self.notifications
                    .notify(format!("Error {status}"), Severity::Error);
            }
            SubmissionOutcome::NetworkError { message } => {
                tracing::error!(%message, "Payment service unavailable");
                self.notifications
                    .notify(UNREACHABLE_MESSAGE, Severity::Error);
            }
            SubmissionOutcome::Idle | SubmissionOutcome::Pending => {}
        }

        self.outcome = outcome;
    }

    /// Restore an empty form. Ignored while a submission is in flight.
    pub fn reset(&mut self) {
        if self.outcome.is_pending() {
            tracing::warn!("Reset ignored: a submission is pending");
            return;
        }
        self.form.clear();
        self.errors = ErrorState::new();
        self.outcome = SubmissionOutcome::Idle;
        self.notifications.dismiss();
    }

    /// Surface server-side validation messages next to their fields
    fn merge_server_field_errors(&mut self, body: &ResponseBody) {
        let Some(field_errors) = body.service_error().and_then(|e| e.field_errors) else {
            return;
        };
        for (name, message) in field_errors {
            match Field::from_name(&name) {
                Some(field) => self.errors.set(field, message),
                None => tracing::debug!(field = %name, "Ignoring error for unknown field"),
            }
        }
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new(crate::state::DEFAULT_LIFETIME)
    }
}

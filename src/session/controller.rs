//! Submission controller: runs one submission end to end

use super::form_session::FormSession;
use super::guard::PendingGuard;
use crate::api::{PaymentApi, PaymentPayload, TransportError};
use crate::state::{SubmissionOutcome, SERVICE_HINT};

/// Send a payload and classify whatever happens into a terminal outcome.
///
/// Never fails: transport problems become `NetworkError`.
pub async fn resolve<A: PaymentApi + ?Sized>(
    api: &A,
    payload: &PaymentPayload,
) -> SubmissionOutcome {
    match api.submit_payment(payload).await {
        Ok(response) if response.ok => SubmissionOutcome::Succeeded {
            status: response.status,
            body: response.body,
        },
        Ok(response) => SubmissionOutcome::Failed {
            status: response.status,
            body: response.body,
        },
        Err(err) => SubmissionOutcome::NetworkError {
            message: network_error_message(&err),
        },
    }
}

fn network_error_message(err: &TransportError) -> String {
    match err {
        TransportError::Unreachable(_) | TransportError::ReadBody(_) => {
            format!("{err}. {SERVICE_HINT}")
        }
        TransportError::MalformedBody(_) | TransportError::Encode(_) => err.to_string(),
    }
}

/// Owns a form session together with the client it submits through
pub struct PaymentController<A: PaymentApi> {
    api: A,
    session: FormSession,
}

impl<A: PaymentApi> PaymentController<A> {
    pub fn new(api: A, session: FormSession) -> Self {
        Self { api, session }
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut FormSession {
        &mut self.session
    }

    /// Validate, send and record the outcome in place.
    ///
    /// If this future is dropped mid-request the session still leaves Pending.
    pub async fn submit(&mut self) -> &SubmissionOutcome {
        let Some(payload) = self.session.begin_submit() else {
            return self.session.outcome();
        };

        let guard = PendingGuard::new(&mut self.session);
        let outcome = resolve(&self.api, &payload).await;
        guard.resolve(outcome);

        self.session.outcome()
    }
}

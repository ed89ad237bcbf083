//! Events accepted by a form session

use crate::state::{Field, SubmissionOutcome};
use tokio::time::Instant;

/// One unit of work for [`super::FormSession::handle`].
///
/// Events are processed one at a time, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// Raw input for a field, before normalization
    FieldChanged(Field, String),
    SubmitRequested,
    /// Terminal outcome of the in-flight submission
    SubmissionFinished(SubmissionOutcome),
    Reset,
    /// Clock tick used to expire notifications
    Tick(Instant),
}

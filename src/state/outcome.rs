//! Submission lifecycle and the response panel derived from it

use super::response::ResponseBody;
use serde_json::json;

/// Appended to the message of failures where the service never answered
pub const SERVICE_HINT: &str = "Is the local payment service running and reachable?";

/// Terminal classification of a submission attempt, plus the idle and
/// in-flight states
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    Pending,
    Succeeded {
        status: u16,
        body: ResponseBody,
    },
    Failed {
        status: u16,
        body: ResponseBody,
    },
    NetworkError {
        message: String,
    },
}

impl SubmissionOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Transport success flag; `None` while nothing has been received
    pub fn ok(&self) -> Option<bool> {
        match self {
            Self::Succeeded { .. } => Some(true),
            Self::Failed { .. } | Self::NetworkError { .. } => Some(false),
            Self::Idle | Self::Pending => None,
        }
    }

    /// What the response panel shows, if anything
    pub fn response(&self) -> Option<ResponseView> {
        match self {
            Self::Idle | Self::Pending => None,
            Self::Succeeded { status, body } => Some(ResponseView {
                status: Some(*status),
                ok: true,
                body: body.clone(),
            }),
            Self::Failed { status, body } => Some(ResponseView {
                status: Some(*status),
                ok: false,
                body: body.clone(),
            }),
            Self::NetworkError { message } => Some(ResponseView {
                status: None,
                ok: false,
                body: ResponseBody::Json(json!({ "error": message })),
            }),
        }
    }
}

/// Response panel contents
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseView {
    /// HTTP status; absent when no response was received
    pub status: Option<u16>,
    pub ok: bool,
    pub body: ResponseBody,
}

impl ResponseView {
    pub fn status_label(&self) -> String {
        match self.status {
            Some(status) => format!("HTTP {status}"),
            None => "HTTP —".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_and_pending_have_no_response() {
        assert!(SubmissionOutcome::Idle.response().is_none());
        assert!(SubmissionOutcome::Pending.response().is_none());
        assert!(SubmissionOutcome::Pending.is_pending());
    }

    #[test]
    fn test_failed_response_is_not_ok() {
        let outcome = SubmissionOutcome::Failed {
            status: 422,
            body: ResponseBody::Text("declined".to_string()),
        };
        let view = outcome.response().unwrap();
        assert_eq!(view.status_label(), "HTTP 422");
        assert!(!view.ok);
        assert_eq!(outcome.ok(), Some(false));
    }

    #[test]
    fn test_network_error_response_states_hint_once() {
        let message = format!("connection failed: refused. {SERVICE_HINT}");
        let outcome = SubmissionOutcome::NetworkError {
            message: message.clone(),
        };
        let view = outcome.response().unwrap();
        assert_eq!(view.status, None);
        assert_eq!(view.status_label(), "HTTP —");
        assert_eq!(view.body, ResponseBody::Json(json!({ "error": message })));
        assert_eq!(view.body.to_string().matches(SERVICE_HINT).count(), 1);
    }
}

//! Non-interactive submission: form values on stdin, report on stdout

use crate::api::PaymentApi;
use crate::session::{FormSession, PaymentController};
use crate::state::{Field, ResponseBody};
use anyhow::{bail, Context, Result};
use serde_json::{json, Map, Value};

/// Result of a headless run
#[derive(Debug)]
pub struct HeadlessReport {
    pub report: Value,
    pub succeeded: bool,
}

/// Fill a form from a JSON object of wire field names, submit it once and
/// describe what happened.
pub async fn run<A: PaymentApi>(
    api: A,
    session: FormSession,
    input: &str,
) -> Result<HeadlessReport> {
    let values: Map<String, Value> =
        serde_json::from_str(input).context("Expected a JSON object of field values")?;

    let mut controller = PaymentController::new(api, session);
    for (name, value) in values {
        let Some(field) = Field::from_name(&name) else {
            tracing::warn!(field = %name, "Ignoring unknown form field");
            continue;
        };
        let raw = field_input(&name, value)?;
        controller.session_mut().field_changed(field, &raw);
    }

    controller.submit().await;

    let session = controller.session();
    let errors: Map<String, Value> = session
        .errors()
        .iter()
        .filter(|(_, message)| !message.is_empty())
        .map(|(field, message)| (field.name().to_string(), Value::from(message)))
        .collect();

    let response = session.outcome().response().map(|view| {
        json!({
            "status": view.status,
            "ok": view.ok,
            "body": body_value(&view.body),
        })
    });

    let report = json!({
        "errors": errors,
        "response": response,
        "notification": session.notification().map(|n| n.message.clone()),
    });

    Ok(HeadlessReport {
        report,
        succeeded: session.outcome().ok() == Some(true),
    })
}

/// Raw text for a field; numbers and booleans are taken as typed
fn field_input(name: &str, value: Value) -> Result<String> {
    match value {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => {
            bail!("Field '{name}' must be a string, number or boolean")
        }
    }
}

fn body_value(body: &ResponseBody) -> Value {
    match body {
        ResponseBody::Json(value) => value.clone(),
        ResponseBody::Text(text) => Value::String(text.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiResponse, MockPaymentApi};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_invalid_input_reports_errors_without_request() {
        let mut api = MockPaymentApi::new();
        api.expect_submit_payment().never();

        let input = r#"{"firstName": "Ada", "cardNumber": "123 456", "cvv": "123"}"#;
        let result = run(api, FormSession::default(), input).await.unwrap();

        assert!(!result.succeeded);
        assert_eq!(
            result.report,
            json!({
                "errors": {
                    "lastName": "Required",
                    "zipCode": "Required",
                    "cardNumber": "Card number too short"
                },
                "response": null,
                "notification": null
            })
        );
    }

    #[tokio::test]
    async fn test_successful_submission_report() {
        let mut api = MockPaymentApi::new();
        api.expect_submit_payment()
            .withf(|payload| {
                payload.card_number == "4111111111111111" && payload.zip_code == "90210"
            })
            .returning(|_| {
                Ok(ApiResponse {
                    status: 200,
                    ok: true,
                    body: ResponseBody::Text("accepted".to_string()),
                })
            });

        let input = r#"{
            "firstName": "Ada",
            "lastName": "Lovelace",
            "zipCode": " 90210 ",
            "cardNumber": "4111-1111-1111-1111"
        }"#;
        let result = run(api, FormSession::default(), input).await.unwrap();

        assert!(result.succeeded);
        assert_eq!(result.report["response"]["status"], 200);
        assert_eq!(result.report["response"]["body"], "accepted");
        assert_eq!(result.report["notification"], "Payment submitted ✓");
    }

    #[tokio::test]
    async fn test_numeric_values_are_accepted() {
        let mut api = MockPaymentApi::new();
        api.expect_submit_payment()
            .withf(|payload| {
                payload.zip_code == "90210" && payload.card_number == "4111111111111111"
            })
            .times(1)
            .returning(|_| {
                Ok(ApiResponse {
                    status: 201,
                    ok: true,
                    body: ResponseBody::Text("created".to_string()),
                })
            });

        let input = r#"{
            "firstName": "Ada",
            "lastName": "Lovelace",
            "zipCode": 90210,
            "cardNumber": 4111111111111111
        }"#;
        let result = run(api, FormSession::default(), input).await.unwrap();

        assert!(result.succeeded);
        assert_eq!(result.report["errors"], json!({}));
    }

    #[tokio::test]
    async fn test_nested_value_is_rejected_by_name() {
        let mut api = MockPaymentApi::new();
        api.expect_submit_payment().never();

        let input = r#"{"zipCode": ["90210"]}"#;
        let err = run(api, FormSession::default(), input).await.unwrap_err();
        assert!(err.to_string().contains("zipCode"));
    }

    #[tokio::test]
    async fn test_rejects_non_object_input() {
        let api = MockPaymentApi::new();
        assert!(run(api, FormSession::default(), "[1, 2]").await.is_err());
    }
}

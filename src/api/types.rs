//! Wire types for the payment service

use crate::state::{card_digits, Field, FormState, ResponseBody};
use serde::Serialize;
use thiserror::Error;

/// JSON body of `POST /v1/payments`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPayload {
    pub first_name: String,
    pub last_name: String,
    pub zip_code: String,
    /// Digits only; never carries grouping or other formatting
    pub card_number: String,
}

impl PaymentPayload {
    pub fn from_form(form: &FormState) -> Self {
        Self {
            first_name: form.get(Field::FirstName).trim().to_string(),
            last_name: form.get(Field::LastName).trim().to_string(),
            zip_code: form.get(Field::ZipCode).trim().to_string(),
            card_number: card_digits(form.get(Field::CardNumber)),
        }
    }
}

/// A response received from the payment service, whatever its status
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Transport-level success flag
    pub ok: bool,
    pub body: ResponseBody,
}

/// Failures that prevent a usable response from being received
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("could not encode the payment payload: {0}")]
    Encode(String),
    #[error("could not reach the payment service: {0}")]
    Unreachable(String),
    #[error("could not read the response body: {0}")]
    ReadBody(String),
    #[error("response declared JSON but could not be parsed: {0}")]
    MalformedBody(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_trims_and_strips_card_formatting() {
        let mut form = FormState::new();
        form.set(Field::FirstName, "  Ada ");
        form.set(Field::LastName, "Lovelace  ");
        form.set(Field::ZipCode, " 90210");
        form.set(Field::CardNumber, "4111 1111 1111 1111");

        let payload = PaymentPayload::from_form(&form);
        assert_eq!(payload.first_name, "Ada");
        assert_eq!(payload.last_name, "Lovelace");
        assert_eq!(payload.zip_code, "90210");
        assert_eq!(payload.card_number, "4111111111111111");
    }

    #[test]
    fn test_payload_serializes_with_wire_names() {
        let payload = PaymentPayload {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            zip_code: "90210".to_string(),
            card_number: "1234567".to_string(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "zipCode": "90210",
                "cardNumber": "1234567"
            })
        );
    }

    #[test]
    fn test_transport_error_messages() {
        let err = TransportError::Unreachable("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "could not reach the payment service: connection refused"
        );
        assert_eq!(
            TransportError::MalformedBody("eof".to_string()).to_string(),
            "response declared JSON but could not be parsed: eof"
        );
    }
}

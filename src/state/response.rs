//! Response bodies returned by the payment service and typed views over them

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Body of a payment service response
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Body declared as `application/json` and parsed
    Json(Value),
    /// Any other body, kept verbatim
    Text(String),
}

impl ResponseBody {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Interpret the body as a payment receipt, if it has that shape
    pub fn receipt(&self) -> Option<PaymentReceipt> {
        self.as_json()
            .filter(|v| v.is_object())
            .and_then(|v| PaymentReceipt::deserialize(v).ok())
    }

    /// Interpret the body as a structured service error, if it has that shape
    pub fn service_error(&self) -> Option<ServiceError> {
        self.as_json()
            .filter(|v| v.get("errorCode").is_some())
            .and_then(|v| ServiceError::deserialize(v).ok())
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => {
                let pretty = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
                f.write_str(&pretty)
            }
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Successful payment acknowledgement
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    /// SUCCESS / FAILED
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Structured error returned by the payment service
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceError {
    pub error_code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<NaiveDateTime>,
    /// Server-side validation messages keyed by wire field name
    #[serde(default)]
    pub field_errors: Option<BTreeMap<String, String>>,
}

/// Accept ISO-8601 local timestamps; anything else becomes `None`
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<NaiveDateTime>().ok()))
}

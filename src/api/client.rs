//! HTTP client for the payment service
//!
//! Sends the payment payload as JSON and turns whatever comes back into an
//! [`ApiResponse`], or a [`TransportError`] when no usable response arrives.

use super::traits::PaymentApi;
use super::types::{ApiResponse, PaymentPayload, TransportError};
use crate::config::FormConfig;
use crate::state::ResponseBody;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, CONTENT_TYPE};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Client for the payment endpoint
pub struct HttpPaymentClient {
    http: reqwest::Client,
    url: String,
}

impl HttpPaymentClient {
    /// Create a client for the endpoint named in the config
    pub fn new(config: &FormConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            url: config.payment_url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PaymentApi for HttpPaymentClient {
    async fn submit_payment(
        &self,
        payload: &PaymentPayload,
    ) -> Result<ApiResponse, TransportError> {
        let body =
            serde_json::to_vec(payload).map_err(|e| TransportError::Encode(e.to_string()))?;

        tracing::info!(
            url = %self.url,
            card_digits = payload.card_number.len(),
            "Submitting payment"
        );

        let response = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| TransportError::Unreachable(describe_request_error(&e)))?;

        let status = response.status();
        let is_json = declares_json(response.headers());
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::ReadBody(e.to_string()))?;

        let body = if is_json {
            let value = serde_json::from_str(&text)
                .map_err(|e| TransportError::MalformedBody(e.to_string()))?;
            ResponseBody::Json(value)
        } else {
            ResponseBody::Text(text)
        };

        tracing::info!(
            status = status.as_u16(),
            json = is_json,
            "Payment service responded"
        );

        Ok(ApiResponse {
            status: status.as_u16(),
            ok: status.is_success(),
            body,
        })
    }
}

fn declares_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| ct.contains(JSON_CONTENT_TYPE))
}

fn describe_request_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {err}")
    } else if err.is_connect() {
        format!("connection failed: {err}")
    } else {
        err.to_string()
    }
}

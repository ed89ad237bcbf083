//! Trait abstraction for the payment client to enable mocking in tests

use super::types::{ApiResponse, PaymentPayload, TransportError};
use async_trait::async_trait;

/// Payment service operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentApi: Send + Sync {
    /// POST a payment and return whatever the service answered.
    ///
    /// Any HTTP status is an `Ok` response; `Err` means no usable response
    /// was received.
    async fn submit_payment(&self, payload: &PaymentPayload)
        -> Result<ApiResponse, TransportError>;
}

//! Payment service client module

mod client;
mod traits;
mod types;

pub use client::HttpPaymentClient;
pub use traits::PaymentApi;
pub use types::{PaymentPayload, TransportError};

#[cfg(test)]
pub use traits::MockPaymentApi;
#[cfg(test)]
pub use types::ApiResponse;

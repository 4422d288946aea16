//! Order-service API client.
//!
//! One outbound surface: placing an order. The client is bound to a single
//! base address at construction (see [`crate::config`]) and guarantees
//! unauthenticated requests - any ambient `Authorization` default is
//! stripped before the client is built.

mod orders;
mod types;

pub use orders::OrdersClient;
pub use types::{OrderItem, OrderPayload};

use thiserror::Error;

/// Errors that can occur when talking to the order service.
///
/// Connectivity failures, timeouts and non-2xx statuses are all recoverable
/// the same way: the user resubmits. The flow does not distinguish between
/// them beyond logging.
#[derive(Debug, Error)]
pub enum OrderApiError {
    /// Transport-level failure (connection, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The order service answered with a non-success status.
    #[error("order service returned {0}")]
    Status(reqwest::StatusCode),

    /// The base address cannot be combined with the order endpoint path.
    #[error("invalid order endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

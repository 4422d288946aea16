//! Orders HTTP client.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::{debug, instrument};
use url::Url;

use crate::config::CheckoutConfig;

use super::OrderApiError;
use super::types::OrderPayload;

/// Path of the order-placement endpoint, relative to the base address.
const PLACE_ORDER_PATH: &str = "api/orders/place";

/// Client for the order service.
///
/// Bound to one base address at construction. Cheap to clone; the underlying
/// connection pool is shared.
#[derive(Clone)]
pub struct OrdersClient {
    inner: Arc<OrdersClientInner>,
}

struct OrdersClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl OrdersClient {
    /// Create a new orders client bound to `base_url`.
    ///
    /// The base address is expected to be an origin (scheme + host); the
    /// endpoint path is appended per request. Default headers are limited to
    /// the JSON content type - in particular, no `Authorization` header is
    /// ever sent, even if one leaked into the ambient header defaults.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be built.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        // Order placement is unauthenticated; strip any credential default.
        headers.remove(AUTHORIZATION);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(OrdersClientInner { client, base_url }),
        }
    }

    /// Create a client from the loaded configuration.
    #[must_use]
    pub fn from_config(config: &CheckoutConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    /// The base address this client is bound to.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Place an order.
    ///
    /// Any 2xx response is success; the response body is unused. There are
    /// no retries and no idempotency key, so resubmitting after a transient
    /// failure can create a duplicate order server-side.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    #[instrument(skip(self, payload), fields(items = payload.items.len()))]
    pub async fn place_order(&self, payload: &OrderPayload) -> Result<(), OrderApiError> {
        let url = self.inner.base_url.join(PLACE_ORDER_PATH)?;

        let response = self.inner.client.post(url).json(payload).send().await?;

        let status = response.status();
        if status.is_success() {
            debug!(%status, "order placed");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!(
            %status,
            body = %body.chars().take(200).collect::<String>(),
            "order service rejected the order"
        );
        Err(OrderApiError::Status(status))
    }
}

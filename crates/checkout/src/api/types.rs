//! Wire types for the order-placement endpoint.

use serde::{Deserialize, Serialize};
use tamarind_core::{CartItem, Email, ProductId};

/// One order line on the wire: which product, how many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Product identifier.
    pub product_id: ProductId,
    /// Number of units ordered.
    pub quantity: u32,
}

/// The minimal data sent to the backend to create an order.
///
/// Built as a snapshot of the cart at submission time: `items` has the same
/// length and ordering as the cart it was derived from. Never persisted
/// locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    /// Customer display name from the checkout form.
    pub customer_name: String,
    /// Validated customer email.
    pub email: Email,
    /// Ordered sequence of lines, one per cart item.
    pub items: Vec<OrderItem>,
}

impl OrderPayload {
    /// Snapshot the given cart items into an order payload.
    #[must_use]
    pub fn new(customer_name: String, email: Email, cart_items: &[CartItem]) -> Self {
        let items = cart_items
            .iter()
            .map(|item| OrderItem {
                product_id: item.id,
                quantity: item.quantity,
            })
            .collect();

        Self {
            customer_name,
            email,
            items,
        }
    }
}

//! Cart line entries.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::image::ImageSource;
use super::price::Price;

/// A product line entry with quantity, awaiting checkout.
///
/// Cart items are owned by the cart collaborator that feeds the checkout
/// flow; the flow only reads them. `quantity` is expected to be positive -
/// the cart never produces zero-quantity lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product identifier, echoed back in the order payload.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Number of units.
    pub quantity: u32,
    /// Optional product image; `None` renders the placeholder.
    pub image: Option<ImageSource>,
}

impl CartItem {
    /// The line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

//! Askama rendering of the checkout modal.
//!
//! The flow is the source of truth; this module projects it into flat view
//! structs the template can consume. Prices arrive pre-formatted - the line
//! total is `price x quantity` and the grand total is the externally
//! supplied total, both at two decimal places.

use askama::Template;
use tamarind_core::CartItem;
use tamarind_core::image::PLACEHOLDER_IMAGE_URL;

use crate::flow::CheckoutFlow;
use crate::toast::ToastSeverity;

/// Cart line display data for the template.
#[derive(Debug, Clone)]
pub struct CartLineView {
    /// Image display source (data URL, external URL or placeholder).
    pub image_src: String,
    /// Product name.
    pub name: String,
    /// Units ordered.
    pub quantity: u32,
    /// Formatted line total, e.g. `₹20.00`.
    pub line_total: String,
}

impl From<&CartItem> for CartLineView {
    fn from(item: &CartItem) -> Self {
        Self {
            image_src: item
                .image
                .as_ref()
                .map_or_else(|| PLACEHOLDER_IMAGE_URL.to_string(), |img| img.display_url()),
            name: item.name.clone(),
            quantity: item.quantity,
            line_total: item.line_total().display(),
        }
    }
}

/// Toast display data for the template.
#[derive(Debug, Clone)]
pub struct ToastView {
    /// Banner body text.
    pub message: String,
    /// Success renders green, failure red.
    pub success: bool,
}

/// The checkout modal markup.
#[derive(Template)]
#[template(path = "checkout.html")]
pub struct CheckoutModal {
    /// Whether the modal is shown at all.
    pub visible: bool,
    /// One row per cart item, in cart order.
    pub lines: Vec<CartLineView>,
    /// Formatted grand total (not recomputed from the lines).
    pub total: String,
    /// Current name field value.
    pub name: String,
    /// Current email field value.
    pub email: String,
    /// Inline name error; `None` until surfaced by a submit attempt.
    pub name_error: Option<String>,
    /// Inline email error; `None` until surfaced by a submit attempt.
    pub email_error: Option<String>,
    /// Disables both action buttons and shows the spinner.
    pub submitting: bool,
    /// The single toast slot.
    pub toast: Option<ToastView>,
}

impl CheckoutModal {
    /// Project the flow state into renderable form.
    #[must_use]
    pub fn from_flow(flow: &CheckoutFlow) -> Self {
        let errors = flow.form().visible_errors();

        Self {
            visible: flow.is_visible(),
            lines: flow.items().iter().map(CartLineView::from).collect(),
            total: flow.total_price().display(),
            name: flow.form().name().to_string(),
            email: flow.form().email().to_string(),
            name_error: errors.name.map(|e| e.to_string()),
            email_error: errors.email.map(|e| e.to_string()),
            submitting: flow.is_submitting(),
            toast: flow.toast().map(|toast| ToastView {
                message: toast.message,
                success: toast.severity == ToastSeverity::Success,
            }),
        }
    }
}

//! The checkout flow state machine.
//!
//! One modal, one linear flow: validate the form, snapshot the cart into an
//! order payload, POST it, surface the outcome as a toast. On success the
//! cart collaborator's persisted `cart` key is cleared and navigation to the
//! root route is scheduled after a fixed delay.
//!
//! The network call is the only suspension point. While it is outstanding
//! the flow is in [`FlowPhase::Submitting`] and both action buttons are
//! disabled, so one component instance can never have two orders in flight.
//! Delayed side effects (navigation, toast auto-hide) run on timers owned by
//! the flow and are aborted when it is dropped, so nothing fires against a
//! defunct component.

use std::sync::Arc;
use std::time::Duration;

use tamarind_core::{CartItem, Price};
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

use crate::api::{OrderPayload, OrdersClient};
use crate::form::CheckoutForm;
use crate::toast::{Toast, ToastHost, ToastSeverity};

/// Storage key under which the cart collaborator persists the cart.
pub const CART_STORAGE_KEY: &str = "cart";

/// Route navigated to after a successful order.
pub const ROOT_PATH: &str = "/";

/// Delay between a successful order and navigation to the root route.
pub const NAVIGATE_DELAY: Duration = Duration::from_millis(2000);

/// Toast shown when the order is placed.
pub const ORDER_PLACED_MESSAGE: &str = "Order placed successfully!";

/// Toast shown when order placement fails.
pub const ORDER_FAILED_MESSAGE: &str = "Failed to place order. Please try again.";

/// Persistent key-value storage owned by the cart collaborator.
///
/// The flow only ever removes the [`CART_STORAGE_KEY`] entry, and only after
/// a successful order.
pub trait CartStore: Send + Sync {
    /// Remove a stored key. Removing an absent key is a no-op.
    fn remove(&self, key: &str);
}

/// Client-side router collaborator.
pub trait Navigator: Send + Sync {
    /// Request navigation to an application path.
    fn navigate(&self, path: &str);
}

/// Where the flow currently is.
///
/// `Validating` and `Submitting` are passed through during
/// [`CheckoutFlow::submit`]; `Succeeded` and `Failed` stick until the next
/// field edit or submit attempt returns the flow to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowPhase {
    /// Waiting for input.
    #[default]
    Idle,
    /// Checking the form on a submit attempt.
    Validating,
    /// Order request in flight; action buttons disabled.
    Submitting,
    /// Last attempt placed the order.
    Succeeded,
    /// Last attempt failed; the user may resubmit.
    Failed,
}

/// The checkout modal's state and behavior.
///
/// Inputs - the cart items and the precomputed total - are snapshots handed
/// over by the cart collaborator and trusted as mutually consistent; the
/// flow never re-derives the total from the items.
pub struct CheckoutFlow {
    client: OrdersClient,
    store: Arc<dyn CartStore>,
    navigator: Arc<dyn Navigator>,
    items: Vec<CartItem>,
    total_price: Price,
    form: CheckoutForm,
    toasts: ToastHost,
    phase: FlowPhase,
    visible: bool,
    nav_timer: Option<JoinHandle<()>>,
}

impl CheckoutFlow {
    /// Create a hidden checkout flow over the given cart snapshot.
    #[must_use]
    pub fn new(
        client: OrdersClient,
        store: Arc<dyn CartStore>,
        navigator: Arc<dyn Navigator>,
        items: Vec<CartItem>,
        total_price: Price,
    ) -> Self {
        Self {
            client,
            store,
            navigator,
            items,
            total_price,
            form: CheckoutForm::new(),
            toasts: ToastHost::new(),
            phase: FlowPhase::Idle,
            visible: false,
            nav_timer: None,
        }
    }

    /// Show the modal.
    pub const fn open(&mut self) {
        self.visible = true;
    }

    /// Request to close the modal.
    ///
    /// Hides the modal without further side effects. Ignored (returns
    /// `false`) while an order is in flight.
    pub const fn close(&mut self) -> bool {
        if matches!(self.phase, FlowPhase::Submitting) {
            return false;
        }
        self.visible = false;
        true
    }

    /// Whether the modal is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current phase of the flow.
    #[must_use]
    pub const fn phase(&self) -> FlowPhase {
        self.phase
    }

    /// Whether an order request is outstanding.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.phase, FlowPhase::Submitting)
    }

    /// Whether the close and submit buttons accept input.
    #[must_use]
    pub const fn buttons_enabled(&self) -> bool {
        !self.is_submitting()
    }

    /// The cart lines this flow displays.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// The externally supplied grand total.
    #[must_use]
    pub const fn total_price(&self) -> Price {
        self.total_price
    }

    /// The form state.
    #[must_use]
    pub const fn form(&self) -> &CheckoutForm {
        &self.form
    }

    /// The currently visible toast, if any.
    #[must_use]
    pub fn toast(&self) -> Option<Toast> {
        self.toasts.current()
    }

    /// Dismiss the current toast.
    pub fn dismiss_toast(&mut self) {
        self.toasts.dismiss();
    }

    /// Update the name field.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.form.set_name(value);
        self.settle();
    }

    /// Update the email field.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.set_email(value);
        self.settle();
    }

    /// Attempt to place the order.
    ///
    /// Ignored while a request is already in flight. A failed validation
    /// surfaces inline field errors and never touches the network. On
    /// success the persisted cart is cleared and navigation to
    /// [`ROOT_PATH`] fires once, [`NAVIGATE_DELAY`] later. On failure the
    /// stored cart is untouched and no navigation happens; the user may
    /// simply resubmit.
    #[instrument(skip(self), fields(items = self.items.len()))]
    pub async fn submit(&mut self) {
        if self.is_submitting() {
            return;
        }

        self.phase = FlowPhase::Validating;
        self.form.mark_validated();

        let contact = match self.form.validate() {
            Ok(contact) => contact,
            Err(errors) => {
                debug!(?errors, "submit blocked by validation");
                self.phase = FlowPhase::Idle;
                return;
            }
        };

        self.phase = FlowPhase::Submitting;
        let payload = OrderPayload::new(contact.name, contact.email, &self.items);

        match self.client.place_order(&payload).await {
            Ok(()) => {
                self.toasts
                    .show(ORDER_PLACED_MESSAGE, ToastSeverity::Success);
                self.store.remove(CART_STORAGE_KEY);
                self.schedule_navigation();
                self.phase = FlowPhase::Succeeded;
            }
            Err(error) => {
                tracing::error!(%error, "order placement failed");
                self.toasts.show(ORDER_FAILED_MESSAGE, ToastSeverity::Danger);
                self.phase = FlowPhase::Failed;
            }
        }
    }

    /// A finished attempt settles back to idle on the next field edit.
    const fn settle(&mut self) {
        if matches!(self.phase, FlowPhase::Succeeded | FlowPhase::Failed) {
            self.phase = FlowPhase::Idle;
        }
    }

    fn schedule_navigation(&mut self) {
        // At most one pending navigation; a replacement wins.
        if let Some(timer) = self.nav_timer.take() {
            timer.abort();
        }

        let navigator = Arc::clone(&self.navigator);
        self.nav_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(NAVIGATE_DELAY).await;
            navigator.navigate(ROOT_PATH);
        }));
    }
}

impl Drop for CheckoutFlow {
    fn drop(&mut self) {
        // Timers must not outlive the component they act for.
        if let Some(timer) = self.nav_timer.take() {
            timer.abort();
        }
    }
}

//! Tamarind Checkout - the storefront checkout fragment.
//!
//! This crate implements the checkout modal flow: it displays the cart
//! handed over by the cart collaborator, captures the customer's name and
//! email with deferred validation, and places the order against the remote
//! order service.
//!
//! # Architecture
//!
//! - [`config`] - Base-address resolution from the environment
//! - [`api`] - Orders HTTP client and wire types (`reqwest`)
//! - [`form`] - Name/email form state with deferred validation
//! - [`flow`] - The checkout state machine and its collaborator seams
//! - [`toast`] - Single-slot transient notifications
//! - [`view`] - Askama rendering of the modal markup
//!
//! The flow never aggregates the cart itself; items and the grand total are
//! inputs, trusted as consistent by the caller.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod flow;
pub mod form;
pub mod toast;
pub mod view;

pub use api::{OrderApiError, OrderItem, OrderPayload, OrdersClient};
pub use config::{CheckoutConfig, ConfigError};
pub use flow::{CartStore, CheckoutFlow, FlowPhase, Navigator};
pub use form::{CheckoutForm, ContactDetails, FieldError, FormErrors};
pub use toast::{Toast, ToastHost, ToastSeverity};

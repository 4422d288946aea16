//! Integration test support for the Tamarind checkout.
//!
//! Provides recording stand-ins for the flow's collaborator seams (storage
//! and router) plus cart fixtures shared by the test files under `tests/`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tamarind-integration-tests
//! ```

#![allow(clippy::unwrap_used)]

use std::sync::Mutex;

use rust_decimal::Decimal;
use tamarind_checkout::{CartStore, Navigator};
use tamarind_core::{CartItem, ImageSource, Price, ProductId};

/// Records every key removed from storage.
#[derive(Debug, Default)]
pub struct RecordingStore {
    removed: Mutex<Vec<String>>,
}

impl RecordingStore {
    /// Keys removed so far, in order.
    pub fn removed_keys(&self) -> Vec<String> {
        self.removed.lock().unwrap().clone()
    }
}

impl CartStore for RecordingStore {
    fn remove(&self, key: &str) {
        self.removed.lock().unwrap().push(key.to_string());
    }
}

/// Records every navigation request.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Paths navigated to so far, in order.
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}

/// The smallest useful cart: one pen, two units, twenty rupees.
pub fn pen_cart() -> (Vec<CartItem>, Price) {
    let items = vec![CartItem {
        id: ProductId::new(1),
        name: "Pen".to_string(),
        price: Price::inr(Decimal::new(1000, 2)),
        quantity: 2,
        image: None,
    }];
    (items, Price::inr(Decimal::new(2000, 2)))
}

/// A two-line cart with mixed image payloads.
pub fn stationery_cart() -> (Vec<CartItem>, Price) {
    let items = vec![
        CartItem {
            id: ProductId::new(1),
            name: "Pen".to_string(),
            price: Price::inr(Decimal::new(1000, 2)),
            quantity: 2,
            image: Some(ImageSource::parse("aGVsbG8=").unwrap()),
        },
        CartItem {
            id: ProductId::new(5),
            name: "Notebook".to_string(),
            price: Price::inr(Decimal::new(24950, 2)),
            quantity: 1,
            image: Some(ImageSource::parse("https://cdn.example.com/notebook.jpg").unwrap()),
        },
    ];
    (items, Price::inr(Decimal::new(26950, 2)))
}

/// Initialize test logging once; safe to call from every test.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

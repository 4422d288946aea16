//! Core types for the Tamarind checkout.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod email;
pub mod id;
pub mod image;
pub mod price;

pub use cart::CartItem;
pub use email::{Email, EmailError};
pub use id::*;
pub use image::{ImageSource, ImageSourceError};
pub use price::{CurrencyCode, Price};

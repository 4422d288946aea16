//! Tamarind Core - Shared types library.
//!
//! This crate provides common types used across the Tamarind checkout
//! components:
//! - `checkout` - The checkout modal flow and orders API client
//! - `integration-tests` - End-to-end flow tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no timers.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and
//!   image payloads, plus the [`types::CartItem`] line entry

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

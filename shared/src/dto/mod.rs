//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged between the app and the
//! trade data provider.
//!
//! ## Module Organization
//!
//! - [`trade`] - Supplier search, trade opportunities, proforma invoices, and
//!   onboarding application DTOs
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON
//!
//! ```text
//! {
//!   "id": "sup-001",
//!   "name": "Shenzhen Electronics Co.",
//!   "product": "Consumer Electronics",
//!   "unit_price_usd": 50.0,
//!   "min_order_quantity": 100,
//!   "rating": 4.5
//! }
//! ```

pub mod trade;

pub use trade::*;

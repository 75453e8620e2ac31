//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the ShapShap desktop app and its
//! data-provider layer. All DTOs use JSON serialization via `serde`, so a
//! provider backed by a real sourcing API can reuse the same types unchanged.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for provider communication
//!   - **[`dto::trade`]**: Supplier search, opportunities, proforma, onboarding DTOs
//! - **[`utils`]**: Shared display-formatting helpers
//!   - **[`utils::format_money`]**: Format amounts with 2 decimals and thousands separators
//!   - **[`utils::format_rate`]**: Format FX rates with magnitude-aware precision
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None` (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - All structs implement both `Serialize` and `Deserialize` for bidirectional communication
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::trade::SupplierQuery;
//! use shared::utils::format_money;
//!
//! let query = SupplierQuery::for_product("solar panels");
//! assert!(query.max_unit_price_usd.is_none());
//! assert_eq!(format_money(1_006_000.0), "1,006,000.00");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;

//! # Utility Functions
//!
//! Shared utility functions used across the application.
//!
//! ## Modules
//!
//! - **[`validation`]**: Input validation rules (amounts, required fields, transfers)
//! - **[`runtime`]**: Global Tokio runtime for background tasks
//! - **[`logging`]**: File-based tracing setup
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate display formatting
//! - [`crate::core`]: Core abstractions and error types

pub mod logging;
pub mod runtime;
pub mod validation;

//! # Common Error Types
//!
//! Consolidated error handling for the ShapShap desktop application.
//!
//! This module provides a centralized error type [`AppError`] plus the
//! user-facing input taxonomy [`ValidationError`].
//!
//! ## Error Categories
//!
//! Errors are categorized by their source:
//!
//! - **Provider**: Trade data provider failures (search, opportunities, proforma)
//! - **State**: Application state management errors (lock failures, invalid state)
//! - **Validation**: User input errors with a fixed, testable taxonomy
//!
//! ## Usage Pattern
//!
//! ```rust
//! use shapshap::core::error::{AppError, ValidationError};
//!
//! fn validate_transfer_amount(amount: f64, balance: f64) -> Result<f64, AppError> {
//!     if amount <= 0.0 {
//!         return Err(ValidationError::InvalidAmount.into());
//!     }
//!     if amount > balance {
//!         return Err(ValidationError::InsufficientBalance.into());
//!     }
//!     Ok(amount)
//! }
//! ```
//!
//! ## Error Conversion
//!
//! - `String` / `&str` → `AppError::Provider`
//! - `ValidationError` → `AppError::Validation`

use thiserror::Error;

/// User input validation failures.
///
/// This is the fixed taxonomy the UI matches on to render inline form errors,
/// so variants are structural rather than free-form strings.
///
/// # Example
///
/// ```rust
/// use shapshap::core::error::ValidationError;
///
/// let err = ValidationError::MissingField { field: "recipient".to_string() };
/// assert_eq!(err.to_string(), "Required field missing: recipient");
/// assert_eq!(ValidationError::InsufficientBalance.to_string(), "Insufficient balance");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was left empty
    #[error("Required field missing: {field}")]
    MissingField { field: String },

    /// Amount did not parse as a positive number
    #[error("Amount must be a positive number")]
    InvalidAmount,

    /// Transfer amount exceeds the available balance
    #[error("Insufficient balance")]
    InsufficientBalance,
}

impl ValidationError {
    /// Build a `MissingField` for the named form field
    pub fn missing(field: &str) -> Self {
        ValidationError::MissingField {
            field: field.to_string(),
        }
    }
}

/// Application-wide error type.
///
/// Each variant carries enough context for the UI to display a useful
/// message. The `#[error]` attribute from `thiserror` provides `Display`
/// and `Error` implementations.
///
/// # Example
///
/// ```rust
/// use shapshap::core::error::{AppError, ValidationError};
///
/// let provider_err = AppError::Provider("request timed out".to_string());
/// let validation_err = AppError::Validation(ValidationError::InvalidAmount);
///
/// assert_eq!(provider_err.to_string(), "Provider error: request timed out");
/// assert_eq!(validation_err.to_string(), "Amount must be a positive number");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AppError {
    /// Trade data provider failure.
    ///
    /// The bundled mock provider never fails, but the trait contract allows
    /// it so network-backed providers slot in without API changes.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Application state management failure.
    ///
    /// Lock contention or an invalid state transition. Should not occur in
    /// normal operation.
    #[error("State error: {0}")]
    State(String),

    /// User input validation failure, see [`ValidationError`].
    #[error("{0}")]
    Validation(ValidationError),
}

/// Convenience type alias for `Result<T, AppError>`.
///
/// ```rust
/// use shapshap::core::error::Result;
///
/// fn operation() -> Result<String> {
///     Ok("success".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, AppError>;

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Provider(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Provider(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_messages() {
        assert_eq!(
            ValidationError::missing("account_number").to_string(),
            "Required field missing: account_number"
        );
        assert_eq!(
            ValidationError::InvalidAmount.to_string(),
            "Amount must be a positive number"
        );
        assert_eq!(
            ValidationError::InsufficientBalance.to_string(),
            "Insufficient balance"
        );
    }

    #[test]
    fn test_validation_converts_to_app_error() {
        let err: AppError = ValidationError::InvalidAmount.into();
        assert_eq!(err, AppError::Validation(ValidationError::InvalidAmount));
        assert_eq!(err.to_string(), "Amount must be a positive number");
    }

    #[test]
    fn test_string_converts_to_provider_error() {
        let err: AppError = "timeout".into();
        assert_eq!(err.to_string(), "Provider error: timeout");
    }
}

//! Validation rules for user input
//!
//! Form-level helpers return [`ValidationResult`] for inline field errors;
//! money-moving operations return the structured
//! [`ValidationError`](crate::core::error::ValidationError) taxonomy so the
//! caller can match on the exact failure.

use crate::core::error::ValidationError;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<ValidationError>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(error: ValidationError) -> Self {
        Self {
            is_valid: false,
            error: Some(error),
        }
    }

    /// Display text for the field error, empty when valid
    pub fn message(&self) -> String {
        self.error
            .as_ref()
            .map(|e| e.to_string())
            .unwrap_or_default()
    }
}

/// Validate that a required text field is non-empty (after trimming)
pub fn validate_required(field: &str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::err(ValidationError::missing(field));
    }
    ValidationResult::ok()
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    if email.trim().is_empty() {
        return ValidationResult::err(ValidationError::missing("email"));
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() || !parts[1].contains('.') {
        // Format problems surface as a missing valid email rather than a new
        // error variant; the inline hint names the field
        return ValidationResult::err(ValidationError::missing("valid email"));
    }

    ValidationResult::ok()
}

/// Parse an amount field as a strictly positive number
pub fn parse_positive_amount(input: &str) -> Result<f64, ValidationError> {
    let amount = input
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidAmount)?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ValidationError::InvalidAmount);
    }
    Ok(amount)
}

/// Validate a CNY transfer: recipient present, amount positive and covered.
///
/// Returns the parsed amount so the caller debits exactly what was validated.
pub fn validate_transfer(
    recipient: &str,
    amount_input: &str,
    balance: f64,
) -> Result<f64, ValidationError> {
    if recipient.trim().is_empty() {
        return Err(ValidationError::missing("recipient"));
    }
    let amount = parse_positive_amount(amount_input)?;
    if amount > balance {
        return Err(ValidationError::InsufficientBalance);
    }
    Ok(amount)
}

/// Validate a wallet top-up request: payment method chosen, account present
pub fn validate_topup(
    payment_method: Option<&str>,
    account_number: &str,
) -> Result<(), ValidationError> {
    if payment_method.is_none() {
        return Err(ValidationError::missing("payment method"));
    }
    if account_number.trim().is_empty() {
        return Err(ValidationError::missing("account number"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        assert!(validate_required("full name", "Amina Diallo").is_valid);
        assert!(!validate_required("full name", "").is_valid);
        assert!(!validate_required("full name", "   ").is_valid);
        assert_eq!(
            validate_required("full name", "").message(),
            "Required field missing: full name"
        );
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com").is_valid);
        assert!(validate_email("buyer@imports.co.ng").is_valid);
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("invalid").is_valid);
        assert!(!validate_email("@example.com").is_valid);
        assert!(!validate_email("test@").is_valid);
    }

    #[test]
    fn test_parse_positive_amount() {
        assert_eq!(parse_positive_amount("250.50"), Ok(250.50));
        assert_eq!(parse_positive_amount(" 10 "), Ok(10.0));
        assert_eq!(parse_positive_amount(""), Err(ValidationError::InvalidAmount));
        assert_eq!(parse_positive_amount("abc"), Err(ValidationError::InvalidAmount));
        assert_eq!(parse_positive_amount("0"), Err(ValidationError::InvalidAmount));
        assert_eq!(parse_positive_amount("-5"), Err(ValidationError::InvalidAmount));
        assert_eq!(parse_positive_amount("inf"), Err(ValidationError::InvalidAmount));
    }

    #[test]
    fn test_transfer_validation() {
        assert_eq!(validate_transfer("ACC-889", "40", 100.0), Ok(40.0));
        assert_eq!(
            validate_transfer("", "40", 100.0),
            Err(ValidationError::missing("recipient"))
        );
        assert_eq!(
            validate_transfer("ACC-889", "zero", 100.0),
            Err(ValidationError::InvalidAmount)
        );
        assert_eq!(
            validate_transfer("ACC-889", "100.01", 100.0),
            Err(ValidationError::InsufficientBalance)
        );
        // Exactly the balance is allowed
        assert_eq!(validate_transfer("ACC-889", "100", 100.0), Ok(100.0));
    }

    #[test]
    fn test_topup_validation() {
        assert_eq!(validate_topup(Some("Mobile Money"), "0788112233"), Ok(()));
        assert_eq!(
            validate_topup(None, "0788112233"),
            Err(ValidationError::missing("payment method"))
        );
        assert_eq!(
            validate_topup(Some("Card"), "  "),
            Err(ValidationError::missing("account number"))
        );
    }
}

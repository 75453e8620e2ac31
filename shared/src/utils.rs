//! # Shared Utility Functions
//!
//! Display-formatting helpers used by the desktop app and any future surfaces.
//!
//! ## Money & Rate Formatting
//!
//! - [`format_money`] - Format an amount with 2 decimals and thousands separators
//! - [`format_rate`] - Format an FX rate with enough precision for sub-cent rates
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_money, format_rate};
//!
//! assert_eq!(format_money(1_012_600.0), "1,012,600.00");
//! assert_eq!(format_rate(0.0048), "0.004800");
//! ```

/// Format a monetary amount with 2 decimal places and comma thousands separators.
///
/// Negative amounts keep their sign; the integer part is grouped in threes.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_money;
///
/// assert_eq!(format_money(4800.0), "4,800.00");
/// assert_eq!(format_money(0.0), "0.00");
/// assert_eq!(format_money(-125.5), "-125.50");
/// ```
pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some(parts) => parts,
        None => (fixed.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Format an FX rate with magnitude-aware precision.
///
/// Rates at or above 0.01 get 4 decimal places; smaller rates (sub-cent
/// currencies like NGN or VND against CNY) get 6 so the quote is legible.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_rate;
///
/// assert_eq!(format_rate(0.21), "0.2100");
/// assert_eq!(format_rate(0.00029), "0.000290");
/// ```
pub fn format_rate(rate: f64) -> String {
    if rate.abs() >= 0.01 {
        format!("{:.4}", rate)
    } else {
        format!("{:.6}", rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money_grouping() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(999.99), "999.99");
        assert_eq!(format_money(1000.0), "1,000.00");
        assert_eq!(format_money(1_006_000.0), "1,006,000.00");
        assert_eq!(format_money(1_017_663.0), "1,017,663.00");
    }

    #[test]
    fn test_format_money_negative() {
        assert_eq!(format_money(-1234.5), "-1,234.50");
    }

    #[test]
    fn test_format_rate_precision() {
        assert_eq!(format_rate(0.48), "0.4800");
        assert_eq!(format_rate(0.055), "0.0550");
        assert_eq!(format_rate(0.0048), "0.004800");
        assert_eq!(format_rate(0.00036), "0.000360");
    }
}

//! # Corridor Currencies
//!
//! The African and Asian import-corridor currencies ShapShap quotes against
//! the Chinese Yuan, with indicative mid-market base rates.
//!
//! Rates are expressed as **CNY per 1 unit of the source currency** and seed
//! the [`crate::exchange::ticker::RateTicker`] random walk; they are not live
//! market data.

use serde::{Deserialize, Serialize};

/// A supported source currency for CNY conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Nigerian Naira
    Ngn,
    /// Central African CFA Franc
    Xaf,
    /// West African CFA Franc
    Xof,
    /// Kenyan Shilling
    Kes,
    /// Ghanaian Cedi
    Ghs,
    /// Ethiopian Birr
    Etb,
    /// Pakistani Rupee
    Pkr,
    /// Bangladeshi Taka
    Bdt,
    /// Vietnamese Dong
    Vnd,
    /// Thai Baht
    Thb,
    /// Congolese Franc
    Cdf,
}

impl Currency {
    /// All supported currencies in display order
    pub fn all() -> &'static [Currency] {
        &[
            Currency::Ngn,
            Currency::Xaf,
            Currency::Xof,
            Currency::Kes,
            Currency::Ghs,
            Currency::Etb,
            Currency::Pkr,
            Currency::Bdt,
            Currency::Vnd,
            Currency::Thb,
            Currency::Cdf,
        ]
    }

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Ngn => "NGN",
            Currency::Xaf => "XAF",
            Currency::Xof => "XOF",
            Currency::Kes => "KES",
            Currency::Ghs => "GHS",
            Currency::Etb => "ETB",
            Currency::Pkr => "PKR",
            Currency::Bdt => "BDT",
            Currency::Vnd => "VND",
            Currency::Thb => "THB",
            Currency::Cdf => "CDF",
        }
    }

    /// Full display name
    pub fn name(&self) -> &'static str {
        match self {
            Currency::Ngn => "Nigerian Naira",
            Currency::Xaf => "Central African Franc",
            Currency::Xof => "West African Franc",
            Currency::Kes => "Kenyan Shilling",
            Currency::Ghs => "Ghanaian Cedi",
            Currency::Etb => "Ethiopian Birr",
            Currency::Pkr => "Pakistani Rupee",
            Currency::Bdt => "Bangladeshi Taka",
            Currency::Vnd => "Vietnamese Dong",
            Currency::Thb => "Thai Baht",
            Currency::Cdf => "Congolese Franc",
        }
    }

    /// Flag emoji for the currency's primary country
    pub fn flag(&self) -> &'static str {
        match self {
            Currency::Ngn => "🇳🇬",
            Currency::Xaf => "🇨🇲",
            Currency::Xof => "🇸🇳",
            Currency::Kes => "🇰🇪",
            Currency::Ghs => "🇬🇭",
            Currency::Etb => "🇪🇹",
            Currency::Pkr => "🇵🇰",
            Currency::Bdt => "🇧🇩",
            Currency::Vnd => "🇻🇳",
            Currency::Thb => "🇹🇭",
            Currency::Cdf => "🇨🇩",
        }
    }

    /// Indicative mid-market rate to CNY (CNY per 1 unit)
    pub fn base_rate(&self) -> f64 {
        match self {
            Currency::Ngn => 0.0048,
            Currency::Xaf => 0.0118,
            Currency::Xof => 0.0118,
            Currency::Kes => 0.055,
            Currency::Ghs => 0.48,
            Currency::Etb => 0.062,
            Currency::Pkr => 0.025,
            Currency::Bdt => 0.061,
            Currency::Vnd => 0.00029,
            Currency::Thb => 0.21,
            Currency::Cdf => 0.00036,
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Ngn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_currencies_listed_once() {
        let all = Currency::all();
        assert_eq!(all.len(), 11);
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_base_rates_positive() {
        for currency in Currency::all() {
            assert!(currency.base_rate() > 0.0, "{} rate", currency.code());
        }
    }

    #[test]
    fn test_cfa_francs_share_peg() {
        // XAF and XOF are both pegged to the euro at the same parity
        assert_eq!(
            Currency::Xaf.base_rate(),
            Currency::Xof.base_rate()
        );
    }

    #[test]
    fn test_default_is_naira() {
        assert_eq!(Currency::default(), Currency::Ngn);
        assert_eq!(Currency::default().code(), "NGN");
    }
}

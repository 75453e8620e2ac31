//! # Fee Calculator
//!
//! Computes the full cost breakdown for a CNY conversion: conversion output,
//! ShapShap fees, and the comparison against traditional bank and black-market
//! channels.
//!
//! All math is f64 at full precision; rounding to 2 decimals happens only at
//! display time via [`shared::utils::format_money`].

/// Service fee rate for the standard tier (0.5% of amount)
pub const SERVICE_RATE_STANDARD: f64 = 0.005;

/// Service fee rate for the premium tier (0.575% of amount)
pub const SERVICE_RATE_PREMIUM: f64 = 0.00575;

/// Network fee rate (0.1% of amount, both tiers)
pub const NETWORK_RATE: f64 = 0.001;

/// Traditional bank all-in markup on the transfer amount (1.26%)
pub const BANK_MARKUP: f64 = 1.0126;

/// Black-market premium over the bank cost (0.5%)
pub const BLACK_MARKET_MARKUP: f64 = 1.005;

/// Percentage fee schedule for a service tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeSchedule {
    pub service_rate: f64,
    pub network_rate: f64,
}

impl FeeSchedule {
    /// Schedule for the given tier. Premium pays a higher service rate in
    /// exchange for the longer rate-lock window.
    pub fn for_tier(premium: bool) -> Self {
        Self {
            service_rate: if premium {
                SERVICE_RATE_PREMIUM
            } else {
                SERVICE_RATE_STANDARD
            },
            network_rate: NETWORK_RATE,
        }
    }
}

/// Full cost breakdown for one conversion.
///
/// Amounts are in the source currency except `converted`, which is CNY.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quote {
    pub amount: f64,
    pub converted: f64,
    pub service_fee: f64,
    pub network_fee: f64,
    pub total_payable: f64,
    pub bank_cost: f64,
    pub black_market_cost: f64,
    pub savings: f64,
}

impl Quote {
    /// Compute the breakdown for a positive amount at the given rate.
    ///
    /// Non-positive or non-finite amounts produce the zero quote: an empty
    /// amount field is a blank slate, not an error.
    pub fn compute(amount: f64, rate: f64, premium: bool) -> Self {
        if !amount.is_finite() || amount <= 0.0 {
            return Quote::default();
        }

        let fees = FeeSchedule::for_tier(premium);
        let service_fee = amount * fees.service_rate;
        let network_fee = amount * fees.network_rate;
        let total_payable = amount + service_fee + network_fee;
        let bank_cost = amount * BANK_MARKUP;
        let black_market_cost = bank_cost * BLACK_MARKET_MARKUP;

        Quote {
            amount,
            converted: amount * rate,
            service_fee,
            network_fee,
            total_payable,
            bank_cost,
            black_market_cost,
            savings: bank_cost - total_payable,
        }
    }

    /// Compute from a raw amount input field.
    ///
    /// Empty or unparsable text quotes as zero; transfers validate separately
    /// and reject the same input.
    pub fn from_input(input: &str, rate: f64, premium: bool) -> Self {
        let amount = input.trim().parse::<f64>().unwrap_or(0.0);
        Quote::compute(amount, rate, premium)
    }

    /// True if this is the zero quote (no amount entered)
    pub fn is_zero(&self) -> bool {
        self.amount == 0.0
    }
}

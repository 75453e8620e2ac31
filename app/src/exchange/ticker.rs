//! # Live Rate Ticker
//!
//! Random-walk simulation of the displayed FX rate. Each tick perturbs the
//! displayed rate by up to ±0.5% of the currency's base rate, so the quote
//! feels live without a market data feed.
//!
//! The tick cadence (one tick every [`TICK_INTERVAL`]) is driven by the app's
//! frame loop; this module only owns the walk itself, which keeps it
//! deterministic under a seeded RNG in tests.

use crate::exchange::currency::Currency;
use rand::Rng;
use std::time::Duration;

/// Wall-clock interval between ticker updates
pub const TICK_INTERVAL: Duration = Duration::from_secs(3);

/// Maximum perturbation per tick, as a fraction of the base rate (±0.5%)
pub const MAX_STEP_FRACTION: f64 = 0.005;

/// Direction of the last rate movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trend {
    Up,
    Down,
    #[default]
    Flat,
}

impl Trend {
    /// Arrow glyph for the rate line
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Flat => "–",
        }
    }
}

/// Random-walk state for one currency's displayed rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateTicker {
    currency: Currency,
    displayed: f64,
    trend: Trend,
}

impl RateTicker {
    /// Start a ticker at the currency's base rate
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            displayed: currency.base_rate(),
            trend: Trend::Flat,
        }
    }

    /// Advance the walk one step.
    ///
    /// The step size is `base_rate * p` with `p` uniform in
    /// (-[`MAX_STEP_FRACTION`], +[`MAX_STEP_FRACTION`]), so drift stays
    /// proportional to the currency's magnitude.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        let fraction = rng.random_range(-MAX_STEP_FRACTION..MAX_STEP_FRACTION);
        let delta = self.currency.base_rate() * fraction;
        self.displayed += delta;
        self.trend = if delta > 0.0 {
            Trend::Up
        } else if delta < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        };
    }

    /// Switch currency: the walk restarts at the new base rate
    pub fn reset_to(&mut self, currency: Currency) {
        *self = RateTicker::new(currency);
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Current displayed rate (CNY per 1 source unit)
    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    pub fn trend(&self) -> Trend {
        self.trend
    }
}

impl Default for RateTicker {
    fn default() -> Self {
        RateTicker::new(Currency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_starts_at_base_rate() {
        let ticker = RateTicker::new(Currency::Kes);
        assert_eq!(ticker.displayed(), Currency::Kes.base_rate());
        assert_eq!(ticker.trend(), Trend::Flat);
    }

    #[test]
    fn test_step_bounded_by_half_percent_of_base() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut ticker = RateTicker::new(Currency::Ngn);
        let base = Currency::Ngn.base_rate();
        let mut previous = ticker.displayed();
        for _ in 0..1000 {
            ticker.tick(&mut rng);
            let step = (ticker.displayed() - previous).abs();
            assert!(step <= base * MAX_STEP_FRACTION);
            previous = ticker.displayed();
        }
    }

    #[test]
    fn test_trend_follows_delta_sign() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut ticker = RateTicker::new(Currency::Thb);
        let mut previous = ticker.displayed();
        for _ in 0..100 {
            ticker.tick(&mut rng);
            let delta = ticker.displayed() - previous;
            match ticker.trend() {
                Trend::Up => assert!(delta > 0.0),
                Trend::Down => assert!(delta < 0.0),
                Trend::Flat => assert_eq!(delta, 0.0),
            }
            previous = ticker.displayed();
        }
    }

    #[test]
    fn test_currency_switch_resets_walk() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut ticker = RateTicker::new(Currency::Ngn);
        for _ in 0..10 {
            ticker.tick(&mut rng);
        }
        ticker.reset_to(Currency::Vnd);
        assert_eq!(ticker.currency(), Currency::Vnd);
        assert_eq!(ticker.displayed(), Currency::Vnd.base_rate());
        assert_eq!(ticker.trend(), Trend::Flat);
    }
}

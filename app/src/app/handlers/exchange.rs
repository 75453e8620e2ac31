//! # Exchange Handlers
//!
//! Handlers for the exchange screen: amount input, currency selection, tier
//! toggle, and the rate lock.

use crate::app::state::AppState;
use crate::exchange::Currency;
use parking_lot::RwLock;
use std::sync::Arc;

/// Handle amount field edit.
///
/// Internal handler function - use [`crate::app::App::handle_exchange_amount_input`] instead.
pub(crate) fn handle_amount_input(state: Arc<RwLock<AppState>>, input: String) {
    let mut state = state.write();
    state.exchange.amount_input = input;
}

/// Handle currency selection. Ignored while the rate is locked: the locked
/// rate belongs to the currency it was locked at.
///
/// Internal handler function - use [`crate::app::App::handle_currency_select`] instead.
pub(crate) fn handle_currency_select(state: Arc<RwLock<AppState>>, currency: Currency) {
    let mut state = state.write();
    if state.exchange.lock.is_locked() {
        tracing::debug!("Ignoring currency change while rate is locked");
        return;
    }
    if state.exchange.ticker.currency() != currency {
        tracing::info!(currency = currency.code(), "Currency selected");
        state.exchange.ticker.reset_to(currency);
    }
}

/// Handle premium tier toggle.
///
/// Switches both the fee schedule and the rate-lock window. Ignored while
/// locked, matching [`crate::exchange::RateLock::set_tier`].
///
/// Internal handler function - use [`crate::app::App::handle_premium_toggle`] instead.
pub(crate) fn handle_premium_toggle(state: Arc<RwLock<AppState>>, premium: bool) {
    let mut state = state.write();
    if state.exchange.lock.is_locked() {
        tracing::debug!("Ignoring tier change while rate is locked");
        return;
    }
    state.exchange.premium = premium;
    let tier = state.exchange.tier();
    state.exchange.lock.set_tier(tier);
}

/// Toggle the rate lock.
///
/// Internal handler function - use [`crate::app::App::handle_rate_lock_toggle`] instead.
pub(crate) fn handle_rate_lock_toggle(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    if state.exchange.lock.is_locked() {
        tracing::info!("Rate unlocked");
        state.exchange.lock.unlock();
        // Re-base the clocks so the resumed walk doesn't catch up in a burst
        let now = std::time::Instant::now();
        state.exchange.last_ticker_step = now;
        state.exchange.last_countdown_step = now;
    } else {
        tracing::info!(
            rate = state.exchange.ticker.displayed(),
            window = state.exchange.lock.remaining_secs(),
            "Rate locked"
        );
        state.exchange.lock.lock();
    }
}

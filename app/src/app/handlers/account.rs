//! # Account Handlers
//!
//! Handlers for the account screen: wallet top-ups and CNY transfers.
//! Money-moving submits validate through [`crate::utils::validation`] and
//! never mutate the balance on failure.

use crate::app::state::{AccountSection, AppState, PaymentMethod};
use crate::exchange::Currency;
use crate::utils::validation::{validate_topup, validate_transfer};
use parking_lot::RwLock;
use std::sync::Arc;

/// Switch between the Top-Up and Send-CNY sections.
///
/// Internal handler function - use [`crate::app::App::handle_account_section_change`] instead.
pub(crate) fn handle_section_change(state: Arc<RwLock<AppState>>, section: AccountSection) {
    let mut state = state.write();
    state.account.section = section;
}

pub(crate) fn handle_topup_amount_input(state: Arc<RwLock<AppState>>, input: String) {
    let mut state = state.write();
    state.account.topup_amount_input = input;
    state.account.topup_confirmed = false;
}

pub(crate) fn handle_topup_currency_select(state: Arc<RwLock<AppState>>, currency: Currency) {
    let mut state = state.write();
    state.account.topup_currency = currency;
}

pub(crate) fn handle_payment_method_select(state: Arc<RwLock<AppState>>, method: PaymentMethod) {
    let mut state = state.write();
    state.account.payment_method = Some(method);
    state.account.topup_error = None;
}

pub(crate) fn handle_account_number_input(state: Arc<RwLock<AppState>>, input: String) {
    let mut state = state.write();
    state.account.account_number = input;
}

/// Submit the top-up form.
///
/// Internal handler function - use [`crate::app::App::handle_topup_submit`] instead.
pub(crate) fn handle_topup_submit(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();

    let method = state.account.payment_method.map(|m| m.label());
    match validate_topup(method, &state.account.account_number) {
        Ok(()) => {
            tracing::info!(
                method = method.unwrap_or(""),
                currency = state.account.topup_currency.code(),
                "Top-up request accepted"
            );
            state.account.topup_confirmed = true;
            state.account.topup_error = None;
            state.account.topup_amount_input.clear();
            state.account.account_number.clear();
            state.account.payment_method = None;
            state.account.incoming_cny = None;
        }
        Err(e) => {
            tracing::debug!(error = %e, "Top-up rejected");
            state.account.topup_confirmed = false;
            state.account.topup_error = Some(e);
        }
    }
}

pub(crate) fn handle_recipient_input(state: Arc<RwLock<AppState>>, input: String) {
    let mut state = state.write();
    state.account.recipient_input = input;
    state.account.transfer_confirmed = false;
}

pub(crate) fn handle_send_amount_input(state: Arc<RwLock<AppState>>, input: String) {
    let mut state = state.write();
    state.account.send_amount_input = input;
    state.account.transfer_confirmed = false;
}

/// Submit a CNY transfer.
///
/// On success the balance is debited by exactly the validated amount; on any
/// validation failure the balance is untouched and the error is surfaced.
///
/// Internal handler function - use [`crate::app::App::handle_transfer_submit`] instead.
pub(crate) fn handle_transfer_submit(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();

    let result = validate_transfer(
        &state.account.recipient_input,
        &state.account.send_amount_input,
        state.account.cny_balance,
    );
    match result {
        Ok(amount) => {
            state.account.cny_balance -= amount;
            tracing::info!(amount, balance = state.account.cny_balance, "CNY transfer sent");
            state.account.transfer_confirmed = true;
            state.account.transfer_error = None;
            state.account.recipient_input.clear();
            state.account.send_amount_input.clear();
        }
        Err(e) => {
            tracing::debug!(error = %e, "Transfer rejected");
            state.account.transfer_confirmed = false;
            state.account.transfer_error = Some(e);
        }
    }
}

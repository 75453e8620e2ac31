//! # Navigation Handlers
//!
//! Handlers for screen navigation and the typed cross-screen handoffs.

use crate::app::state::{AppState, Screen, SERVICES};
use parking_lot::RwLock;
use shared::dto::trade::SupplierRecord;
use std::sync::Arc;
use std::time::Instant;

/// Handle screen change.
///
/// Internal handler function - use [`crate::app::App::handle_screen_change`] instead.
pub(crate) fn handle_screen_change(state: Arc<RwLock<AppState>>, screen: Screen) {
    let mut state = state.write();
    leave_screen(&mut state);
    state.current_screen = screen;
}

/// Cancel work owned by the screen being left so late results and timer
/// catch-up don't touch discarded state.
fn leave_screen(state: &mut AppState) {
    match state.current_screen {
        Screen::Suppliers => {
            if state.suppliers.searching {
                // Bumping the sequence orphans the in-flight search
                state.suppliers.request_seq += 1;
                state.suppliers.searching = false;
            }
        }
        Screen::Proforma => {
            state.proforma.generating = false;
        }
        Screen::Exchange => {
            // Step clocks are re-based on return so the walk doesn't burst
            let now = Instant::now();
            state.exchange.last_ticker_step = now;
            state.exchange.last_countdown_step = now;
        }
        _ => {}
    }
}

/// Navigate to next screen in Tab order
///
/// Internal handler function - use [`crate::app::App::next_screen`] instead.
pub(crate) fn next_screen(state: Arc<RwLock<AppState>>) {
    let mut state = match state.try_write() {
        Some(guard) => guard,
        None => {
            tracing::warn!("Skipped screen navigation - state locked");
            return;
        }
    };

    let screens = Screen::all();
    let current_idx = screens
        .iter()
        .position(|&s| s == state.current_screen)
        .unwrap_or(0);
    let next = screens[(current_idx + 1) % screens.len()];
    leave_screen(&mut state);
    state.current_screen = next;
}

/// Navigate to previous screen in Tab order
///
/// Internal handler function - use [`crate::app::App::previous_screen`] instead.
pub(crate) fn previous_screen(state: Arc<RwLock<AppState>>) {
    let mut state = match state.try_write() {
        Some(guard) => guard,
        None => {
            tracing::warn!("Skipped screen navigation - state locked");
            return;
        }
    };

    let screens = Screen::all();
    let current_idx = screens
        .iter()
        .position(|&s| s == state.current_screen)
        .unwrap_or(0);
    let prev = screens[(current_idx + screens.len() - 1) % screens.len()];
    leave_screen(&mut state);
    state.current_screen = prev;
}

/// Open the Proforma screen for a supplier picked on the Suppliers screen.
///
/// Internal handler function - use [`crate::app::App::open_proforma_for`] instead.
pub(crate) fn open_proforma_for(state: Arc<RwLock<AppState>>, supplier: SupplierRecord) {
    let mut state = state.write();
    leave_screen(&mut state);
    tracing::info!(supplier = %supplier.name, "Opening proforma for supplier");
    state.proforma.supplier = Some(supplier);
    state.proforma.quote = None;
    state.proforma.error = None;
    state.proforma.generating = false;
    state.current_screen = Screen::Proforma;
}

/// Open Onboarding with one service pre-selected (from a welcome service
/// card or a proforma service link).
///
/// Internal handler function - use [`crate::app::App::open_onboarding_with_service`] instead.
pub(crate) fn open_onboarding_with_service(state: Arc<RwLock<AppState>>, service_idx: usize) {
    let mut state = state.write();
    leave_screen(&mut state);
    if service_idx < SERVICES.len() {
        state.onboarding.selected_services[service_idx] = true;
    }
    state.onboarding.submitted = false;
    state.current_screen = Screen::Onboarding;
}

/// Open the Account screen pre-filled from an Exchange quote.
///
/// Internal handler function - use [`crate::app::App::open_account_with_quote`] instead.
pub(crate) fn open_account_with_quote(
    state: Arc<RwLock<AppState>>,
    total_payable: f64,
    currency: crate::exchange::Currency,
    converted_cny: f64,
) {
    let mut state = state.write();
    leave_screen(&mut state);
    state.account.section = crate::app::state::AccountSection::TopUp;
    state.account.topup_amount_input = format!("{:.2}", total_payable);
    state.account.topup_currency = currency;
    state.account.incoming_cny = Some(converted_cny);
    state.account.topup_confirmed = false;
    state.account.topup_error = None;
    state.current_screen = Screen::Account;
}

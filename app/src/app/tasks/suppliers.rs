//! # Supplier Search Tasks
//!
//! Async task for supplier searches against the trade data provider.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::utils::runtime::TOKIO_RT;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::dto::trade::SupplierQuery;
use std::sync::Arc;
use tracing::info;

/// Kick off a supplier search for the current query input.
///
/// Internal task function - spawns an async task and sends the result via
/// the event channel, tagged with a sequence number so results from an
/// outdated search are discarded.
pub(crate) fn search_suppliers(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    // Flag the search in-flight and snapshot what the task needs, then drop the lock
    let (provider, query, seq) = {
        let mut state = state.write();

        // Skip if already searching (prevents task pileup)
        if state.suppliers.searching {
            return;
        }

        state.suppliers.searching = true;
        state.suppliers.error = None;
        state.suppliers.request_seq += 1;
        (
            state.provider.clone(),
            SupplierQuery::for_product(&state.suppliers.query_input),
            state.suppliers.request_seq,
        )
    }; // Lock released here

    info!(product = %query.product, seq, "Starting supplier search");

    TOKIO_RT.spawn(async move {
        let result = provider
            .search_suppliers(query)
            .await
            .map_err(|e| e.to_string());
        let _ = event_tx.send(AppEvent::SuppliersResult { seq, result }).await;
    });
}

/// Handle search query field edit.
pub(crate) fn handle_query_input(state: Arc<RwLock<AppState>>, input: String) {
    let mut state = state.write();
    state.suppliers.query_input = input;
}

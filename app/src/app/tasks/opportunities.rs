//! # Opportunities Tasks
//!
//! Async task for loading the trade opportunities feed.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::utils::runtime::TOKIO_RT;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Load the opportunities feed.
///
/// Internal task function - spawns an async task and sends the result via
/// the event channel. No-op while a load is already in flight.
pub(crate) fn load_opportunities(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let provider = {
        let mut state = state.write();
        if state.opportunities.loading {
            return;
        }
        state.opportunities.loading = true;
        state.opportunities.error = None;
        state.provider.clone()
    }; // Lock released here

    TOKIO_RT.spawn(async move {
        let result = provider.get_opportunities().await.map_err(|e| e.to_string());
        let _ = event_tx.send(AppEvent::OpportunitiesResult(result)).await;
    });
}

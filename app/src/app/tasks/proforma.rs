//! # Proforma Tasks
//!
//! Async task for generating proforma invoices.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::utils::runtime::TOKIO_RT;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::dto::trade::ProformaRequest;
use std::sync::Arc;
use tracing::info;

/// Generate a proforma invoice for the selected supplier and quantity.
///
/// Quantity parsing failures surface immediately as a field error without
/// spawning a task; provider results come back over the event channel.
pub(crate) fn generate_proforma(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (provider, request) = {
        let mut state = state.write();
        if state.proforma.generating {
            return;
        }

        let supplier = match &state.proforma.supplier {
            Some(supplier) => supplier.clone(),
            None => return,
        };

        let quantity = match state.proforma.quantity_input.trim().parse::<u32>() {
            Ok(q) if q > 0 => q,
            _ => {
                state.proforma.error =
                    Some(crate::core::error::ValidationError::InvalidAmount.to_string());
                return;
            }
        };

        state.proforma.generating = true;
        state.proforma.error = None;
        state.proforma.quote = None;
        (
            state.provider.clone(),
            ProformaRequest {
                supplier_id: supplier.id,
                supplier_name: supplier.name,
                product: supplier.product,
                quantity,
            },
        )
    }; // Lock released here

    info!(supplier = %request.supplier_name, quantity = request.quantity, "Generating proforma");

    TOKIO_RT.spawn(async move {
        let result = provider
            .generate_proforma(request)
            .await
            .map_err(|e| e.to_string());
        let _ = event_tx.send(AppEvent::ProformaResult(result)).await;
    });
}

/// Handle quantity field edit.
pub(crate) fn handle_quantity_input(state: Arc<RwLock<AppState>>, input: String) {
    let mut state = state.write();
    state.proforma.quantity_input = input;
}

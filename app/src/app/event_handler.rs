//! # Event Handler
//!
//! Handles async event results from background tasks, updating application state accordingly.
//!
//! This module processes `AppEvent` messages received from async provider
//! tasks and updates the application state in a thread-safe manner. Results
//! that arrive after the user moved on (a newer search, a cancelled proforma)
//! are dropped instead of applied.

use crate::app::{App, AppEvent};
use shared::dto::trade::{OpportunityRecord, ProformaQuote, SupplierRecord};

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle async event results.
    ///
    /// Acquires a write lock per event for minimal duration.
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::SuppliersResult { seq, result } => {
                self.handle_suppliers_result(seq, result);
            }
            AppEvent::OpportunitiesResult(result) => {
                self.handle_opportunities_result(result);
            }
            AppEvent::ProformaResult(result) => {
                self.handle_proforma_result(result);
            }
        }
    }
}

impl App {
    fn handle_suppliers_result(&mut self, seq: u64, result: Result<Vec<SupplierRecord>, String>) {
        let mut state = self.state.write();

        // A newer search was issued (or the screen was left); this result is stale
        if seq != state.suppliers.request_seq {
            tracing::debug!(seq, current = state.suppliers.request_seq, "Discarding stale supplier results");
            return;
        }

        state.suppliers.searching = false;
        state.suppliers.searched = true;
        match result {
            Ok(records) => {
                tracing::info!(count = records.len(), "Supplier search completed");
                state.suppliers.results = records;
                state.suppliers.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Supplier search failed");
                state.suppliers.results.clear();
                state.suppliers.error = Some(e);
            }
        }
    }

    fn handle_opportunities_result(&mut self, result: Result<Vec<OpportunityRecord>, String>) {
        let mut state = self.state.write();
        state.opportunities.loading = false;
        state.opportunities.loaded = true;
        match result {
            Ok(records) => {
                tracing::info!(count = records.len(), "Opportunities loaded");
                state.opportunities.records = records;
                state.opportunities.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Opportunities load failed");
                state.opportunities.error = Some(e);
            }
        }
    }

    fn handle_proforma_result(&mut self, result: Result<ProformaQuote, String>) {
        let mut state = self.state.write();

        // Generation was cancelled (screen left) before the result arrived
        if !state.proforma.generating {
            tracing::debug!("Discarding proforma result for cancelled request");
            return;
        }

        state.proforma.generating = false;
        match result {
            Ok(quote) => {
                tracing::info!(reference = %quote.reference, "Proforma generated");
                state.proforma.quote = Some(quote);
                state.proforma.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Proforma generation failed");
                state.proforma.error = Some(e);
            }
        }
    }
}

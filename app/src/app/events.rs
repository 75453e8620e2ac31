//! # Application Events
//!
//! Event types for async task communication between background tasks and the main thread.

use shared::dto::trade::{OpportunityRecord, ProformaQuote, SupplierRecord};

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Supplier search completed; `seq` identifies the originating search so
    /// stale results are discarded
    SuppliersResult {
        seq: u64,
        result: Result<Vec<SupplierRecord>, String>,
    },
    /// Opportunities feed loaded
    OpportunitiesResult(Result<Vec<OpportunityRecord>, String>),
    /// Proforma invoice generated
    ProformaResult(Result<ProformaQuote, String>),
}

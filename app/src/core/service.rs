//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use crate::core::error::Result;
use async_trait::async_trait;
use shared::dto::trade::{
    OpportunityRecord, ProformaQuote, ProformaRequest, SupplierQuery, SupplierRecord,
};

/// Trait for trade data operations.
///
/// This trait allows for dependency injection and mocking in tests. The app
/// ships with [`crate::services::provider::MockDataProvider`]; a provider
/// backed by a real sourcing API implements the same contract.
#[async_trait]
pub trait TradeDataProvider: Send + Sync {
    /// Search verified suppliers matching the query
    async fn search_suppliers(&self, query: SupplierQuery) -> Result<Vec<SupplierRecord>>;

    /// Fetch current trade opportunities
    async fn get_opportunities(&self) -> Result<Vec<OpportunityRecord>>;

    /// Generate a proforma invoice for a supplier order
    async fn generate_proforma(&self, request: ProformaRequest) -> Result<ProformaQuote>;
}

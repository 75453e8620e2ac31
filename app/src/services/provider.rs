//! # Mock Trade Data Provider
//!
//! In-process stand-in for the sourcing backend. Responses are fixed records
//! served after realistic latency (via `tokio::time::sleep`), so the UI's
//! loading states behave as they will against the real service.
//!
//! The provider is registered behind the
//! [`TradeDataProvider`](crate::core::service::TradeDataProvider) trait;
//! swapping in a network-backed implementation touches nothing outside
//! app construction.

use crate::core::error::Result;
use crate::core::service::TradeDataProvider;
use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use shared::dto::trade::{
    DemandLevel, OpportunityRecord, ProformaQuote, ProformaRequest, SupplierQuery, SupplierRecord,
};
use std::time::Duration;
use tracing::debug;

/// Simulated latency for supplier search
pub const SEARCH_LATENCY: Duration = Duration::from_millis(1000);

/// Simulated latency for the opportunities feed
pub const OPPORTUNITIES_LATENCY: Duration = Duration::from_millis(800);

/// Simulated latency for proforma generation
pub const PROFORMA_LATENCY: Duration = Duration::from_millis(1500);

/// Mock provider serving fixed supplier, opportunity, and proforma data.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDataProvider;

impl MockDataProvider {
    pub fn new() -> Self {
        Self
    }

    /// The fixed supplier catalog. A non-empty product query replaces each
    /// supplier's product line, mirroring a search that matched on it.
    fn supplier_catalog(product_query: &str) -> Vec<SupplierRecord> {
        let catalog = [
            ("sup-001", "Shenzhen Electronics Co.", "Consumer Electronics", "Shenzhen, China", 50.0, 100, 4.5),
            ("sup-002", "Guangzhou Textiles Ltd.", "Fabrics & Apparel", "Guangzhou, China", 120.0, 50, 4.8),
            ("sup-003", "Hangzhou Machinery Corp.", "Industrial Machinery", "Hangzhou, China", 500.0, 10, 4.2),
            ("sup-004", "Yiwu Toys Factory", "Toys & Games", "Yiwu, China", 5.0, 1000, 4.6),
            ("sup-005", "Ningbo Tools Inc.", "Hand & Power Tools", "Ningbo, China", 35.0, 200, 4.4),
        ];

        let query = product_query.trim();
        catalog
            .iter()
            .map(|(id, name, product, location, price, moq, rating)| SupplierRecord {
                id: (*id).to_string(),
                name: (*name).to_string(),
                product: if query.is_empty() {
                    (*product).to_string()
                } else {
                    query.to_string()
                },
                location: (*location).to_string(),
                unit_price_usd: *price,
                min_order_quantity: *moq,
                rating: *rating,
            })
            .collect()
    }
}

#[async_trait]
impl TradeDataProvider for MockDataProvider {
    /// Return the full catalog after search latency.
    ///
    /// The query's filter fields (price bounds, currency) are accepted but
    /// not applied here; filtering is the real backend's job and the mock
    /// keeps its pass-through behavior.
    async fn search_suppliers(&self, query: SupplierQuery) -> Result<Vec<SupplierRecord>> {
        debug!(product = %query.product, "mock supplier search");
        tokio::time::sleep(SEARCH_LATENCY).await;
        Ok(Self::supplier_catalog(&query.product))
    }

    async fn get_opportunities(&self) -> Result<Vec<OpportunityRecord>> {
        tokio::time::sleep(OPPORTUNITIES_LATENCY).await;
        Ok(vec![
            OpportunityRecord {
                id: "opp-001".to_string(),
                route: "China -> Nigeria".to_string(),
                product: "Solar panels & inverters".to_string(),
                demand: DemandLevel::High,
                margin: "25-40%".to_string(),
            },
            OpportunityRecord {
                id: "opp-002".to_string(),
                route: "China -> Kenya".to_string(),
                product: "Textiles & garments".to_string(),
                demand: DemandLevel::Medium,
                margin: "15-25%".to_string(),
            },
            OpportunityRecord {
                id: "opp-003".to_string(),
                route: "China -> Ghana".to_string(),
                product: "Agricultural machinery".to_string(),
                demand: DemandLevel::High,
                margin: "30-45%".to_string(),
            },
        ])
    }

    async fn generate_proforma(&self, request: ProformaRequest) -> Result<ProformaQuote> {
        debug!(supplier = %request.supplier_name, quantity = request.quantity, "generating proforma");
        tokio::time::sleep(PROFORMA_LATENCY).await;

        let now = Utc::now();
        let (scale, serial) = {
            let mut rng = rand::rng();
            (rng.random_range(0.0..1.0), rng.random_range(100..1000))
        };
        let reference = format!("PF-{}-{}", now.format("%Y%m%d"), serial);

        Ok(ProformaQuote {
            url: format!("https://docs.shapshap.example/proforma/{}.pdf", reference),
            reference,
            total_cost_usd: scale * 1000.0 * f64::from(request.quantity),
            issued_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_search_returns_catalog_after_latency() {
        let provider = MockDataProvider::new();
        let start = tokio::time::Instant::now();
        let suppliers = provider
            .search_suppliers(SupplierQuery::for_product(""))
            .await
            .unwrap();

        assert!(start.elapsed() >= SEARCH_LATENCY);
        assert_eq!(suppliers.len(), 5);
        assert_eq!(suppliers[0].name, "Shenzhen Electronics Co.");
        assert_eq!(suppliers[0].unit_price_usd, 50.0);
        assert_eq!(suppliers[3].min_order_quantity, 1000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_substitutes_product_query() {
        let provider = MockDataProvider::new();
        let suppliers = provider
            .search_suppliers(SupplierQuery::for_product("solar panels"))
            .await
            .unwrap();
        assert!(suppliers.iter().all(|s| s.product == "solar panels"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_ignores_filter_fields() {
        let provider = MockDataProvider::new();
        let query = SupplierQuery {
            product: String::new(),
            min_unit_price_usd: Some(100.0),
            max_unit_price_usd: Some(10.0),
            currency: Some("NGN".to_string()),
        };
        // Pass-through: filters are the backend's concern, all records return
        let suppliers = provider.search_suppliers(query).await.unwrap();
        assert_eq!(suppliers.len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_opportunities_feed() {
        let provider = MockDataProvider::new();
        let start = tokio::time::Instant::now();
        let opportunities = provider.get_opportunities().await.unwrap();

        assert!(start.elapsed() >= OPPORTUNITIES_LATENCY);
        assert_eq!(opportunities.len(), 3);
        assert_eq!(opportunities[0].route, "China -> Nigeria");
        assert_eq!(opportunities[1].demand, DemandLevel::Medium);
    }

    #[tokio::test(start_paused = true)]
    async fn test_proforma_total_scales_with_quantity() {
        let provider = MockDataProvider::new();
        let request = ProformaRequest {
            supplier_id: "sup-001".to_string(),
            supplier_name: "Shenzhen Electronics Co.".to_string(),
            product: "Consumer Electronics".to_string(),
            quantity: 200,
        };
        let start = tokio::time::Instant::now();
        let quote = provider.generate_proforma(request).await.unwrap();

        assert!(start.elapsed() >= PROFORMA_LATENCY);
        assert!(quote.reference.starts_with("PF-"));
        assert!(quote.url.ends_with(".pdf"));
        assert!(quote.total_cost_usd >= 0.0);
        assert!(quote.total_cost_usd < 1000.0 * 200.0);
    }
}

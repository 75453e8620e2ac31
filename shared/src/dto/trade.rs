//! Trade DTOs: supplier search, opportunities, proforma invoices, and the
//! onboarding application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Supplier search request
///
/// Only `product` is applied by the bundled mock provider; the remaining
/// filter fields are accepted and forwarded so a provider that does filter
/// server-side implements the same contract unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupplierQuery {
    pub product: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_unit_price_usd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_unit_price_usd: Option<f64>,
    /// Buyer's settlement currency code, e.g. "NGN"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl SupplierQuery {
    /// Build a query filtering by product text only
    pub fn for_product(product: &str) -> Self {
        Self {
            product: product.trim().to_string(),
            min_unit_price_usd: None,
            max_unit_price_usd: None,
            currency: None,
        }
    }
}

/// A verified supplier returned by a search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupplierRecord {
    pub id: String,
    pub name: String,
    pub product: String,
    pub location: String,
    /// Listed unit price, USD
    pub unit_price_usd: f64,
    pub min_order_quantity: u32,
    /// Buyer rating out of 5.0
    pub rating: f64,
}

impl SupplierRecord {
    /// Landed unit price when sourcing through a typical money exchanger
    pub fn price_via_exchanger(&self) -> f64 {
        self.unit_price_usd + 40.0
    }

    /// Landed unit price when sourcing through ShapShap
    pub fn price_via_shapshap(&self) -> f64 {
        self.unit_price_usd + 10.0
    }
}

/// A trade opportunity surfaced to importers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpportunityRecord {
    pub id: String,
    /// e.g. "China -> Nigeria"
    pub route: String,
    pub product: String,
    pub demand: DemandLevel,
    /// Indicative margin text, e.g. "25-40%"
    pub margin: String,
}

/// Demand level for a trade opportunity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DemandLevel {
    High,
    Medium,
    Low,
}

impl DemandLevel {
    pub fn label(&self) -> &'static str {
        match self {
            DemandLevel::High => "High",
            DemandLevel::Medium => "Medium",
            DemandLevel::Low => "Low",
        }
    }
}

/// Proforma invoice generation request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProformaRequest {
    pub supplier_id: String,
    pub supplier_name: String,
    pub product: String,
    pub quantity: u32,
}

/// Generated proforma invoice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProformaQuote {
    /// Human-readable invoice reference, e.g. "PF-20260826-001"
    pub reference: String,
    /// Link to the rendered invoice document
    pub url: String,
    /// Estimated total cost, USD
    pub total_cost_usd: f64,
    /// Issue timestamp, serialized as RFC 3339
    pub issued_at: DateTime<Utc>,
}

/// Importer onboarding (KYC) application
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OnboardingApplication {
    pub full_name: String,
    pub company_name: String,
    pub country: String,
    pub address: String,
    pub email: String,
    pub whatsapp: String,
    /// Names of the requested services
    pub services: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== SupplierQuery Tests ==========

    #[test]
    fn test_for_product_trims_and_leaves_filters_unset() {
        let query = SupplierQuery::for_product("  solar panels ");
        assert_eq!(query.product, "solar panels");
        assert!(query.min_unit_price_usd.is_none());
        assert!(query.max_unit_price_usd.is_none());
        assert!(query.currency.is_none());
    }

    #[test]
    fn test_query_omits_unset_filters_in_json() {
        let query = SupplierQuery::for_product("tools");
        let json = serde_json::to_string(&query).unwrap();
        assert_eq!(json, r#"{"product":"tools"}"#);
    }

    // ========== SupplierRecord Tests ==========

    #[test]
    fn test_price_comparison_offsets() {
        let supplier = SupplierRecord {
            id: "sup-001".to_string(),
            name: "Shenzhen Electronics Co.".to_string(),
            product: "Consumer Electronics".to_string(),
            location: "Shenzhen, China".to_string(),
            unit_price_usd: 50.0,
            min_order_quantity: 100,
            rating: 4.5,
        };
        assert_eq!(supplier.price_via_exchanger(), 90.0);
        assert_eq!(supplier.price_via_shapshap(), 60.0);
        assert!(supplier.price_via_shapshap() < supplier.price_via_exchanger());
    }

    // ========== Serialization Tests ==========

    #[test]
    fn test_demand_level_serializes_lowercase() {
        let json = serde_json::to_string(&DemandLevel::High).unwrap();
        assert_eq!(json, r#""high""#);
        let parsed: DemandLevel = serde_json::from_str(r#""medium""#).unwrap();
        assert_eq!(parsed, DemandLevel::Medium);
    }

    #[test]
    fn test_proforma_quote_round_trip() {
        let quote = ProformaQuote {
            reference: "PF-20260826-001".to_string(),
            url: "https://docs.shapshap.example/proforma/PF-20260826-001.pdf".to_string(),
            total_cost_usd: 12500.0,
            issued_at: "2026-08-26T12:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_string(&quote).unwrap();
        assert!(json.contains("2026-08-26T12:00:00Z"));
        let parsed: ProformaQuote = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, quote);
    }
}

//! # UI Localization
//!
//! English/French string tables for all screen copy. The active [`Language`]
//! lives in settings state and is passed explicitly into render functions;
//! lookups are plain struct field access against a `'static` table, so there
//! is no runtime map and no missing-key failure mode.

use serde::{Deserialize, Serialize};

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    /// The other language (for the toggle button)
    pub fn toggled(&self) -> Language {
        match self {
            Language::En => Language::Fr,
            Language::Fr => Language::En,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Fr => "FR",
        }
    }

    /// String table for this language
    pub fn strings(&self) -> &'static Strings {
        match self {
            Language::En => &EN,
            Language::Fr => &FR,
        }
    }
}

/// All user-visible UI copy for one language.
pub struct Strings {
    // Navigation / screen titles
    pub nav_welcome: &'static str,
    pub nav_suppliers: &'static str,
    pub nav_proforma: &'static str,
    pub nav_onboarding: &'static str,
    pub nav_opportunities: &'static str,
    pub nav_exchange: &'static str,
    pub nav_account: &'static str,

    // Welcome
    pub tagline: &'static str,
    pub cta_find_suppliers: &'static str,
    pub cta_opportunities: &'static str,
    pub cta_exchange: &'static str,

    // Suppliers
    pub search_placeholder: &'static str,
    pub search: &'static str,
    pub searching: &'static str,
    pub min_order: &'static str,
    pub rating: &'static str,
    pub listed_price: &'static str,
    pub via_exchanger: &'static str,
    pub via_shapshap: &'static str,
    pub request_proforma: &'static str,
    pub no_results: &'static str,

    // Proforma
    pub quantity: &'static str,
    pub generate_proforma: &'static str,
    pub generating: &'static str,
    pub invoice_reference: &'static str,
    pub estimated_total: &'static str,
    pub open_document: &'static str,
    pub pick_supplier_hint: &'static str,
    pub our_services: &'static str,

    // Services
    pub svc_sourcing: &'static str,
    pub svc_quality: &'static str,
    pub svc_shipping: &'static str,
    pub svc_customs: &'static str,
    pub svc_escrow: &'static str,
    pub svc_intelligence: &'static str,

    // Onboarding
    pub onboarding_heading: &'static str,
    pub full_name: &'static str,
    pub company_name: &'static str,
    pub country: &'static str,
    pub address: &'static str,
    pub email: &'static str,
    pub whatsapp: &'static str,
    pub services_wanted: &'static str,
    pub submit: &'static str,
    pub application_received: &'static str,

    // Opportunities
    pub opportunities_heading: &'static str,
    pub refresh: &'static str,
    pub loading: &'static str,
    pub route: &'static str,
    pub product: &'static str,
    pub demand: &'static str,
    pub margin: &'static str,

    // Exchange
    pub live_rate: &'static str,
    pub locked_badge: &'static str,
    pub amount_to_send: &'static str,
    pub you_receive: &'static str,
    pub service_fee: &'static str,
    pub network_fee: &'static str,
    pub total_payable: &'static str,
    pub bank_cost: &'static str,
    pub black_market_cost: &'static str,
    pub your_savings: &'static str,
    pub rate_lock: &'static str,
    pub lock_rate: &'static str,
    pub unlock_rate: &'static str,
    pub tier_standard: &'static str,
    pub tier_premium: &'static str,
    pub proceed_to_payment: &'static str,

    // Account
    pub top_up: &'static str,
    pub send_cny: &'static str,
    pub payment_method: &'static str,
    pub account_number: &'static str,
    pub amount: &'static str,
    pub cny_balance: &'static str,
    pub recipient_account: &'static str,
    pub send: &'static str,
    pub topup_confirmed: &'static str,
    pub transfer_confirmed: &'static str,

    // Settings
    pub settings_heading: &'static str,
    pub save: &'static str,
    pub reset: &'static str,
    pub unsaved_changes: &'static str,
}

pub static EN: Strings = Strings {
    nav_welcome: "Welcome",
    nav_suppliers: "Suppliers",
    nav_proforma: "Proforma",
    nav_onboarding: "Get Started",
    nav_opportunities: "Opportunities",
    nav_exchange: "Exchange",
    nav_account: "Account",

    tagline: "Source from China. Pay in your currency. Settle in CNY.",
    cta_find_suppliers: "Find Suppliers",
    cta_opportunities: "Trade Opportunities",
    cta_exchange: "Currency Exchange",

    search_placeholder: "What do you want to import?",
    search: "Search",
    searching: "Searching suppliers...",
    min_order: "MOQ",
    rating: "Rating",
    listed_price: "Listed unit price",
    via_exchanger: "Via money exchanger",
    via_shapshap: "Via ShapShap",
    request_proforma: "Request Proforma",
    no_results: "No suppliers found. Try another product.",

    quantity: "Quantity",
    generate_proforma: "Generate Proforma Invoice",
    generating: "Generating invoice...",
    invoice_reference: "Reference",
    estimated_total: "Estimated total",
    open_document: "Open document",
    pick_supplier_hint: "Pick a supplier from the Suppliers screen first.",
    our_services: "Our services",

    svc_sourcing: "Sourcing",
    svc_quality: "Quality Inspection",
    svc_shipping: "Shipping & Logistics",
    svc_customs: "Customs Clearance",
    svc_escrow: "Payment Escrow",
    svc_intelligence: "Market Intelligence",

    onboarding_heading: "Tell us about your business",
    full_name: "Full name",
    company_name: "Company name",
    country: "Country",
    address: "Address",
    email: "Email",
    whatsapp: "WhatsApp number",
    services_wanted: "Which services do you need?",
    submit: "Submit",
    application_received: "Application received. Our team will contact you on WhatsApp.",

    opportunities_heading: "Trade opportunities this week",
    refresh: "Refresh",
    loading: "Loading...",
    route: "Route",
    product: "Product",
    demand: "Demand",
    margin: "Margin",

    live_rate: "Live rate",
    locked_badge: "LOCKED",
    amount_to_send: "Amount to send",
    you_receive: "Recipient gets (CNY)",
    service_fee: "Service fee",
    network_fee: "Network fee",
    total_payable: "Total payable",
    bank_cost: "Traditional bank",
    black_market_cost: "Black market",
    your_savings: "You save vs bank",
    rate_lock: "Rate guarantee",
    lock_rate: "Lock rate",
    unlock_rate: "Unlock",
    tier_standard: "Standard",
    tier_premium: "Premium",
    proceed_to_payment: "Proceed to Payment",

    top_up: "Top Up",
    send_cny: "Send CNY",
    payment_method: "Payment method",
    account_number: "Account number",
    amount: "Amount",
    cny_balance: "CNY balance",
    recipient_account: "Recipient account",
    send: "Send",
    topup_confirmed: "Top-up request received.",
    transfer_confirmed: "Transfer sent.",

    settings_heading: "Settings",
    save: "Save",
    reset: "Reset",
    unsaved_changes: "Unsaved changes",
};

pub static FR: Strings = Strings {
    nav_welcome: "Accueil",
    nav_suppliers: "Fournisseurs",
    nav_proforma: "Proforma",
    nav_onboarding: "Commencer",
    nav_opportunities: "Opportunités",
    nav_exchange: "Change",
    nav_account: "Compte",

    tagline: "Achetez en Chine. Payez dans votre devise. Réglez en CNY.",
    cta_find_suppliers: "Trouver des fournisseurs",
    cta_opportunities: "Opportunités commerciales",
    cta_exchange: "Change de devises",

    search_placeholder: "Que voulez-vous importer ?",
    search: "Rechercher",
    searching: "Recherche de fournisseurs...",
    min_order: "Qté min.",
    rating: "Note",
    listed_price: "Prix unitaire affiché",
    via_exchanger: "Via changeur de devises",
    via_shapshap: "Via ShapShap",
    request_proforma: "Demander une proforma",
    no_results: "Aucun fournisseur trouvé. Essayez un autre produit.",

    quantity: "Quantité",
    generate_proforma: "Générer la facture proforma",
    generating: "Génération de la facture...",
    invoice_reference: "Référence",
    estimated_total: "Total estimé",
    open_document: "Ouvrir le document",
    pick_supplier_hint: "Choisissez d'abord un fournisseur dans l'écran Fournisseurs.",
    our_services: "Nos services",

    svc_sourcing: "Sourcing",
    svc_quality: "Inspection qualité",
    svc_shipping: "Transport & logistique",
    svc_customs: "Dédouanement",
    svc_escrow: "Séquestre de paiement",
    svc_intelligence: "Veille de marché",

    onboarding_heading: "Parlez-nous de votre entreprise",
    full_name: "Nom complet",
    company_name: "Nom de l'entreprise",
    country: "Pays",
    address: "Adresse",
    email: "E-mail",
    whatsapp: "Numéro WhatsApp",
    services_wanted: "De quels services avez-vous besoin ?",
    submit: "Envoyer",
    application_received: "Demande reçue. Notre équipe vous contactera sur WhatsApp.",

    opportunities_heading: "Opportunités commerciales de la semaine",
    refresh: "Actualiser",
    loading: "Chargement...",
    route: "Itinéraire",
    product: "Produit",
    demand: "Demande",
    margin: "Marge",

    live_rate: "Taux en direct",
    locked_badge: "BLOQUÉ",
    amount_to_send: "Montant à envoyer",
    you_receive: "Le destinataire reçoit (CNY)",
    service_fee: "Frais de service",
    network_fee: "Frais de réseau",
    total_payable: "Total à payer",
    bank_cost: "Banque traditionnelle",
    black_market_cost: "Marché noir",
    your_savings: "Économies vs banque",
    rate_lock: "Garantie de taux",
    lock_rate: "Bloquer le taux",
    unlock_rate: "Débloquer",
    tier_standard: "Standard",
    tier_premium: "Premium",
    proceed_to_payment: "Procéder au paiement",

    top_up: "Recharger",
    send_cny: "Envoyer CNY",
    payment_method: "Mode de paiement",
    account_number: "Numéro de compte",
    amount: "Montant",
    cny_balance: "Solde CNY",
    recipient_account: "Compte du destinataire",
    send: "Envoyer",
    topup_confirmed: "Demande de recharge reçue.",
    transfer_confirmed: "Transfert envoyé.",

    settings_heading: "Paramètres",
    save: "Enregistrer",
    reset: "Réinitialiser",
    unsaved_changes: "Modifications non enregistrées",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Language::En.toggled(), Language::Fr);
        assert_eq!(Language::Fr.toggled(), Language::En);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
        assert_eq!(Language::default().strings().search, "Search");
    }

    #[test]
    fn test_tables_differ() {
        assert_ne!(Language::En.strings().search, Language::Fr.strings().search);
        assert_ne!(Language::En.strings().tagline, Language::Fr.strings().tagline);
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Language::Fr).unwrap(), r#""fr""#);
        let parsed: Language = serde_json::from_str(r#""en""#).unwrap();
        assert_eq!(parsed, Language::En);
    }
}

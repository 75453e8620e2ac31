//! # Application State
//!
//! All shared state for the app lives here, wrapped in `Arc<RwLock<AppState>>`
//! by the [`crate::app::App`] orchestrator. Each screen owns a named state
//! struct; cross-screen handoffs (supplier -> proforma, exchange -> account)
//! are typed writes into the target screen's struct, never route strings.
//!
//! ## Lock Discipline
//!
//! - UI rendering clones a snapshot via `try_read` and releases the lock
//!   before any widget code runs
//! - Handlers take brief write locks and drop them before spawning tasks

use crate::core::service::TradeDataProvider;
use crate::exchange::{Currency, RateLock, RateTicker, Tier};
use crate::ui::i18n::{Language, Strings};
use crate::ui::theme::ThemeConfig;
use shared::dto::trade::{OpportunityRecord, ProformaQuote, SupplierRecord};
use std::sync::Arc;
use std::time::Instant;

/// Opening CNY balance for the demo wallet
pub const INITIAL_CNY_BALANCE: f64 = 100.0;

/// The services offered during onboarding, in display order.
///
/// The welcome screen's service cards and the proforma screen's service
/// links index into this array; that index is the onboarding handoff.
pub const SERVICES: [&str; 6] = [
    "Sourcing",
    "Quality Inspection",
    "Shipping & Logistics",
    "Customs Clearance",
    "Payment Escrow",
    "Market Intelligence",
];

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Suppliers,
    Proforma,
    Onboarding,
    Opportunities,
    Exchange,
    Account,
}

impl Screen {
    /// All screens in Tab/nav order
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Welcome,
            Screen::Suppliers,
            Screen::Proforma,
            Screen::Onboarding,
            Screen::Opportunities,
            Screen::Exchange,
            Screen::Account,
        ]
    }

    /// Localized tab label
    pub fn title(&self, strings: &'static Strings) -> &'static str {
        match self {
            Screen::Welcome => strings.nav_welcome,
            Screen::Suppliers => strings.nav_suppliers,
            Screen::Proforma => strings.nav_proforma,
            Screen::Onboarding => strings.nav_onboarding,
            Screen::Opportunities => strings.nav_opportunities,
            Screen::Exchange => strings.nav_exchange,
            Screen::Account => strings.nav_account,
        }
    }
}

/// Exchange screen state: ticker, rate lock, and quote inputs.
#[derive(Debug, Clone)]
pub struct ExchangeState {
    pub amount_input: String,
    pub ticker: RateTicker,
    pub lock: RateLock,
    pub premium: bool,
    /// Frame-loop clocks for the 3 s ticker cadence and 1 s countdown
    pub last_ticker_step: Instant,
    pub last_countdown_step: Instant,
}

impl Default for ExchangeState {
    fn default() -> Self {
        Self {
            amount_input: String::new(),
            ticker: RateTicker::default(),
            lock: RateLock::default(),
            premium: false,
            last_ticker_step: Instant::now(),
            last_countdown_step: Instant::now(),
        }
    }
}

impl ExchangeState {
    /// Rate-lock tier implied by the premium toggle
    pub fn tier(&self) -> Tier {
        if self.premium {
            Tier::Premium
        } else {
            Tier::Standard
        }
    }
}

/// Supplier search screen state.
#[derive(Debug, Clone, Default)]
pub struct SuppliersState {
    pub query_input: String,
    pub searching: bool,
    /// True after the first search completes (drives the empty-state copy)
    pub searched: bool,
    pub results: Vec<SupplierRecord>,
    /// Monotonic search id; results from an older search are discarded
    pub request_seq: u64,
    pub error: Option<String>,
}

/// Proforma screen state.
#[derive(Debug, Clone)]
pub struct ProformaState {
    /// Supplier handed off from the Suppliers screen
    pub supplier: Option<SupplierRecord>,
    pub quantity_input: String,
    pub generating: bool,
    pub quote: Option<ProformaQuote>,
    pub error: Option<String>,
}

impl Default for ProformaState {
    fn default() -> Self {
        Self {
            supplier: None,
            quantity_input: "1".to_string(),
            generating: false,
            quote: None,
            error: None,
        }
    }
}

/// Onboarding (KYC) form state.
#[derive(Debug, Clone, Default)]
pub struct OnboardingState {
    pub full_name: String,
    pub company_name: String,
    pub country: String,
    pub address: String,
    pub email: String,
    pub whatsapp: String,
    /// Checkbox per entry of [`SERVICES`]
    pub selected_services: [bool; SERVICES.len()],
    /// Field errors from the last submit attempt
    pub errors: Vec<crate::core::error::ValidationError>,
    pub submitted: bool,
}

impl OnboardingState {
    /// Names of the currently selected services
    pub fn selected_service_names(&self) -> Vec<String> {
        SERVICES
            .iter()
            .zip(self.selected_services.iter())
            .filter(|(_, selected)| **selected)
            .map(|(name, _)| (*name).to_string())
            .collect()
    }
}

/// Opportunities screen state.
#[derive(Debug, Clone, Default)]
pub struct OpportunitiesState {
    pub loading: bool,
    /// True once the first load completed; the screen loads on first visit
    pub loaded: bool,
    pub records: Vec<OpportunityRecord>,
    pub error: Option<String>,
}

/// Payment methods offered for wallet top-ups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    MobileMoney,
    BankTransfer,
    Card,
}

impl PaymentMethod {
    pub fn all() -> &'static [PaymentMethod] {
        &[
            PaymentMethod::MobileMoney,
            PaymentMethod::BankTransfer,
            PaymentMethod::Card,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::MobileMoney => "Mobile Money",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Card => "Card",
        }
    }
}

/// Which account section is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountSection {
    #[default]
    TopUp,
    SendCny,
}

/// Account screen state: wallet top-up and CNY transfers.
#[derive(Debug, Clone)]
pub struct AccountState {
    pub section: AccountSection,

    // Top-up form
    pub topup_amount_input: String,
    pub topup_currency: Currency,
    pub payment_method: Option<PaymentMethod>,
    pub account_number: String,
    /// CNY the top-up will credit, when handed off from the Exchange screen
    pub incoming_cny: Option<f64>,
    pub topup_confirmed: bool,
    pub topup_error: Option<crate::core::error::ValidationError>,

    // Send-CNY form
    pub cny_balance: f64,
    pub recipient_input: String,
    pub send_amount_input: String,
    pub transfer_confirmed: bool,
    pub transfer_error: Option<crate::core::error::ValidationError>,
}

impl Default for AccountState {
    fn default() -> Self {
        Self {
            section: AccountSection::default(),
            topup_amount_input: String::new(),
            topup_currency: Currency::default(),
            payment_method: None,
            account_number: String::new(),
            incoming_cny: None,
            topup_confirmed: false,
            topup_error: None,
            cny_balance: INITIAL_CNY_BALANCE,
            recipient_input: String::new(),
            send_amount_input: String::new(),
            transfer_confirmed: false,
            transfer_error: None,
        }
    }
}

/// Persisted settings: theme plus UI language.
#[derive(Debug, Clone)]
pub struct SettingsState {
    pub theme_config: ThemeConfig,
    pub language: Language,
    pub config_path: String,
    pub unsaved_changes: bool,
    /// Settings window visibility; not persisted
    pub panel_open: bool,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            theme_config: ThemeConfig::default(),
            language: Language::default(),
            config_path: String::new(),
            unsaved_changes: false,
            panel_open: false,
        }
    }
}

/// Root application state.
#[derive(Clone)]
pub struct AppState {
    pub current_screen: Screen,
    pub exchange: ExchangeState,
    pub suppliers: SuppliersState,
    pub proforma: ProformaState,
    pub onboarding: OnboardingState,
    pub opportunities: OpportunitiesState,
    pub account: AccountState,
    pub settings: SettingsState,
    /// Data provider behind the service trait; cloned into async tasks
    pub provider: Arc<dyn TradeDataProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn TradeDataProvider>) -> Self {
        Self {
            current_screen: Screen::Welcome,
            exchange: ExchangeState::default(),
            suppliers: SuppliersState::default(),
            proforma: ProformaState::default(),
            onboarding: OnboardingState::default(),
            opportunities: OpportunitiesState::default(),
            account: AccountState::default(),
            settings: SettingsState::default(),
            provider,
        }
    }

    /// Active string table for the current language
    pub fn strings(&self) -> &'static Strings {
        self.settings.language.strings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Screen Tests ==========

    #[test]
    fn test_screen_all_returns_nav_order() {
        let screens = Screen::all();
        assert_eq!(screens.len(), 7);
        assert_eq!(screens[0], Screen::Welcome);
        assert_eq!(screens[5], Screen::Exchange);
        assert_eq!(screens[6], Screen::Account);
    }

    #[test]
    fn test_screen_titles_localize() {
        use crate::ui::i18n::Language;
        assert_eq!(Screen::Suppliers.title(Language::En.strings()), "Suppliers");
        assert_eq!(Screen::Suppliers.title(Language::Fr.strings()), "Fournisseurs");
    }

    // ========== Default State Tests ==========

    #[test]
    fn test_exchange_defaults() {
        let exchange = ExchangeState::default();
        assert_eq!(exchange.amount_input, "");
        assert!(!exchange.premium);
        assert_eq!(exchange.tier(), Tier::Standard);
        assert_eq!(exchange.ticker.currency(), Currency::Ngn);
        assert_eq!(exchange.lock.remaining_secs(), 15);
    }

    #[test]
    fn test_account_defaults() {
        let account = AccountState::default();
        assert_eq!(account.cny_balance, INITIAL_CNY_BALANCE);
        assert_eq!(account.section, AccountSection::TopUp);
        assert!(account.payment_method.is_none());
        assert!(account.incoming_cny.is_none());
    }

    #[test]
    fn test_onboarding_service_selection() {
        let mut onboarding = OnboardingState::default();
        assert!(onboarding.selected_service_names().is_empty());

        onboarding.selected_services[0] = true;
        onboarding.selected_services[4] = true;
        assert_eq!(
            onboarding.selected_service_names(),
            vec!["Sourcing".to_string(), "Payment Escrow".to_string()]
        );
    }

    #[test]
    fn test_payment_methods_cover_rails() {
        assert_eq!(PaymentMethod::all().len(), 3);
        assert_eq!(PaymentMethod::MobileMoney.label(), "Mobile Money");
    }
}

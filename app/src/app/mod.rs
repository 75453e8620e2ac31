//! # Application Orchestrator
//!
//! The main [`App`] struct orchestrates the entire application, coordinating
//! between the UI rendering layer, async provider tasks, and application
//! state management.
//!
//! ## Architecture
//!
//! The application follows an event-driven architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - called every frame                    │   │
//! │  │  - handle_event() - processes async results          │   │
//! │  │  - handle_*() - user action handlers                 │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  │  - Thread-safe shared state                          │   │
//! │  │  - Lock held briefly for minimal duration            │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel
//!                         │ (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Task Threads (Tokio)                     │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  Tasks Module                                        │   │
//! │  │  - search_suppliers() - supplier search              │   │
//! │  │  - load_opportunities() - opportunities feed         │   │
//! │  │  - generate_proforma() - invoice generation          │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Frame-Driven Timers
//!
//! The exchange screen's rate ticker (3 s cadence) and rate-lock countdown
//! (1 s cadence) are advanced from `on_tick()` against wall-clock deadlines.
//! Both are suspended while the rate is locked or the exchange screen is not
//! visible; the step clocks re-base on return so there is no catch-up burst.
//!
//! ## Related Modules
//!
//! - [`state`]: Application state types and definitions
//! - [`events`]: Event enum for async communication
//! - [`handlers`]: User action handlers
//! - [`tasks`]: Async background tasks

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use events::AppEvent;
pub use handlers::onboarding::OnboardingField;
pub use state::*;

use crate::core::service::TradeDataProvider;
use crate::exchange::{ticker::TICK_INTERVAL, Currency};
use crate::services::provider::MockDataProvider;
use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Main application orchestrator.
///
/// Coordinates the egui rendering layer (main thread), async provider tasks
/// (Tokio runtime), and the shared state behind `Arc<RwLock<AppState>>`.
///
/// # Example
///
/// ```rust,no_run
/// use shapshap::app::App;
///
/// let mut app = App::new();
///
/// // In the egui update loop (main thread):
/// app.on_tick();                   // process async events, advance timers
/// // render UI from a state snapshot, dispatch app.handle_* on clicks
/// ```
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// - Use `read()` for reading (shared lock, multiple readers)
    /// - Use `write()` for writing (exclusive lock, single writer)
    /// - Hold locks for minimal duration to keep the UI responsive
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results, polled in `on_tick()`
    pub event_rx: Receiver<AppEvent>,

    /// Channel sender cloned into async tasks
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Create the app with the bundled mock provider and persisted settings.
    pub fn new() -> Self {
        Self::with_provider(Arc::new(MockDataProvider::new()))
    }

    /// Create the app with a specific data provider (used by tests).
    pub fn with_provider(provider: Arc<dyn TradeDataProvider>) -> Self {
        let config_path = handlers::settings::get_config_path();
        let config = handlers::settings::load_settings(&config_path);
        let mut state = AppState::new(provider);
        state.settings = SettingsState {
            theme_config: config.theme,
            language: config.language,
            config_path: config_path.to_string_lossy().to_string(),
            unsaved_changes: false,
            panel_open: false,
        };

        let (event_tx, event_rx) = unbounded();

        tracing::info!("App state initialized - event channel created");

        App {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
        }
    }

    /// Called every frame to process async events and advance timers.
    ///
    /// 1. Drains the event channel with non-blocking `try_recv()`
    /// 2. Advances the exchange ticker and rate-lock countdown when due
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }

        self.advance_exchange_timers(Instant::now(), &mut rand::rng());
    }

    /// Advance the exchange screen's frame-driven timers.
    ///
    /// Extracted from `on_tick` with injected clock and RNG so timer behavior
    /// is testable without waiting wall-clock time.
    pub(crate) fn advance_exchange_timers<R: rand::Rng>(&mut self, now: Instant, rng: &mut R) {
        let mut state = self.state.write();

        // Timers only run while the exchange screen is visible and unlocked;
        // otherwise re-base the clocks so returning doesn't fire a burst
        if state.current_screen != Screen::Exchange || state.exchange.lock.is_locked() {
            state.exchange.last_ticker_step = now;
            state.exchange.last_countdown_step = now;
            return;
        }

        if now.duration_since(state.exchange.last_ticker_step) >= TICK_INTERVAL {
            state.exchange.ticker.tick(rng);
            state.exchange.last_ticker_step = now;
        }

        while now.duration_since(state.exchange.last_countdown_step) >= Duration::from_secs(1) {
            state.exchange.lock.tick_second();
            state.exchange.last_countdown_step += Duration::from_secs(1);
        }
    }

    /// Handle async event results (delegates to the event_handler module)
    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    /// Handle screen change
    pub fn handle_screen_change(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(self.state.clone(), screen);
    }

    /// Navigate to next screen in Tab order
    pub fn next_screen(&mut self) {
        handlers::navigation::next_screen(self.state.clone());
    }

    /// Navigate to previous screen in Tab order
    pub fn previous_screen(&mut self) {
        handlers::navigation::previous_screen(self.state.clone());
    }

    /// Open the Proforma screen for a supplier
    pub fn open_proforma_for(&mut self, supplier: shared::dto::trade::SupplierRecord) {
        handlers::navigation::open_proforma_for(self.state.clone(), supplier);
    }

    /// Open Onboarding with a service pre-selected
    pub fn open_onboarding_with_service(&mut self, service_idx: usize) {
        handlers::navigation::open_onboarding_with_service(self.state.clone(), service_idx);
    }

    /// Open the Account screen pre-filled from an Exchange quote
    pub fn open_account_with_quote(&mut self, total_payable: f64, currency: Currency, converted_cny: f64) {
        handlers::navigation::open_account_with_quote(self.state.clone(), total_payable, currency, converted_cny);
    }

    /// Handle exchange amount field edit
    pub fn handle_exchange_amount_input(&mut self, input: String) {
        handlers::exchange::handle_amount_input(self.state.clone(), input);
    }

    /// Handle currency selection
    pub fn handle_currency_select(&mut self, currency: Currency) {
        handlers::exchange::handle_currency_select(self.state.clone(), currency);
    }

    /// Handle premium tier toggle
    pub fn handle_premium_toggle(&mut self, premium: bool) {
        handlers::exchange::handle_premium_toggle(self.state.clone(), premium);
    }

    /// Handle rate lock toggle
    pub fn handle_rate_lock_toggle(&mut self) {
        handlers::exchange::handle_rate_lock_toggle(self.state.clone());
    }

    /// Handle supplier search query edit
    pub fn handle_supplier_query_input(&mut self, input: String) {
        tasks::suppliers::handle_query_input(self.state.clone(), input);
    }

    /// Handle supplier search button click
    pub fn handle_supplier_search(&mut self) {
        tasks::suppliers::search_suppliers(self.state.clone(), self.event_tx.clone());
    }

    /// Load the opportunities feed
    pub fn handle_opportunities_load(&mut self) {
        tasks::opportunities::load_opportunities(self.state.clone(), self.event_tx.clone());
    }

    /// Handle proforma quantity field edit
    pub fn handle_proforma_quantity_input(&mut self, input: String) {
        tasks::proforma::handle_quantity_input(self.state.clone(), input);
    }

    /// Handle proforma generate button click
    pub fn handle_proforma_generate(&mut self) {
        tasks::proforma::generate_proforma(self.state.clone(), self.event_tx.clone());
    }

    /// Switch account section
    pub fn handle_account_section_change(&mut self, section: AccountSection) {
        handlers::account::handle_section_change(self.state.clone(), section);
    }

    /// Handle top-up amount edit
    pub fn handle_topup_amount_input(&mut self, input: String) {
        handlers::account::handle_topup_amount_input(self.state.clone(), input);
    }

    /// Handle top-up currency selection
    pub fn handle_topup_currency_select(&mut self, currency: Currency) {
        handlers::account::handle_topup_currency_select(self.state.clone(), currency);
    }

    /// Handle payment method selection
    pub fn handle_payment_method_select(&mut self, method: PaymentMethod) {
        handlers::account::handle_payment_method_select(self.state.clone(), method);
    }

    /// Handle account number edit
    pub fn handle_account_number_input(&mut self, input: String) {
        handlers::account::handle_account_number_input(self.state.clone(), input);
    }

    /// Submit the top-up form
    pub fn handle_topup_submit(&mut self) {
        handlers::account::handle_topup_submit(self.state.clone());
    }

    /// Handle transfer recipient edit
    pub fn handle_recipient_input(&mut self, input: String) {
        handlers::account::handle_recipient_input(self.state.clone(), input);
    }

    /// Handle transfer amount edit
    pub fn handle_send_amount_input(&mut self, input: String) {
        handlers::account::handle_send_amount_input(self.state.clone(), input);
    }

    /// Submit a CNY transfer
    pub fn handle_transfer_submit(&mut self) {
        handlers::account::handle_transfer_submit(self.state.clone());
    }

    /// Handle onboarding form field edit
    pub fn handle_onboarding_field(&mut self, field: OnboardingField, value: String) {
        handlers::onboarding::handle_field_input(self.state.clone(), field, value);
    }

    /// Toggle an onboarding service checkbox
    pub fn handle_service_toggle(&mut self, service_idx: usize) {
        handlers::onboarding::handle_service_toggle(self.state.clone(), service_idx);
    }

    /// Submit the onboarding form
    pub fn handle_onboarding_submit(&mut self) {
        handlers::onboarding::handle_submit(self.state.clone());
    }

    /// Open or close the settings window
    pub fn handle_settings_panel_toggle(&mut self) {
        handlers::settings::handle_panel_toggle(self.state.clone());
    }

    /// Handle theme color change
    pub fn handle_theme_color_change(&mut self, config: crate::ui::theme::ThemeConfig) {
        handlers::settings::handle_theme_color_change(self.state.clone(), config);
    }

    /// Toggle the UI language
    pub fn handle_language_toggle(&mut self) {
        handlers::settings::handle_language_toggle(self.state.clone());
    }

    /// Handle settings save
    pub fn handle_settings_save(&mut self) {
        handlers::settings::handle_settings_save(self.state.clone());
    }

    /// Handle settings reset to defaults
    pub fn handle_settings_reset(&mut self) {
        handlers::settings::handle_settings_reset(self.state.clone());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ValidationError;
    use crate::exchange::Tier;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use shared::dto::trade::SupplierRecord;

    fn sample_supplier() -> SupplierRecord {
        SupplierRecord {
            id: "sup-001".to_string(),
            name: "Shenzhen Electronics Co.".to_string(),
            product: "Consumer Electronics".to_string(),
            location: "Shenzhen, China".to_string(),
            unit_price_usd: 50.0,
            min_order_quantity: 100,
            rating: 4.5,
        }
    }

    // ========== Initial State Tests ==========

    #[test]
    fn test_app_creation_and_initial_state() {
        let app = App::new();
        let state = app.state.read();

        assert_eq!(state.current_screen, Screen::Welcome);
        assert_eq!(state.account.cny_balance, INITIAL_CNY_BALANCE);
        assert!(state.suppliers.results.is_empty());
        assert!(!state.suppliers.searching);
        assert!(state.proforma.supplier.is_none());
        assert!(!state.opportunities.loaded);
    }

    // ========== Screen Navigation Tests ==========

    #[test]
    fn test_next_screen_cycles_forward_and_wraps() {
        let mut app = App::new();

        for expected in Screen::all().iter().skip(1) {
            app.next_screen();
            assert_eq!(app.state.read().current_screen, *expected);
        }

        // Should wrap around
        app.next_screen();
        assert_eq!(app.state.read().current_screen, Screen::Welcome);
    }

    #[test]
    fn test_previous_screen_cycles_backward() {
        let mut app = App::new();

        app.previous_screen();
        assert_eq!(app.state.read().current_screen, Screen::Account);

        app.previous_screen();
        assert_eq!(app.state.read().current_screen, Screen::Exchange);
    }

    #[test]
    fn test_next_then_previous_returns_to_original() {
        let mut app = App::new();
        app.next_screen();
        app.previous_screen();
        assert_eq!(app.state.read().current_screen, Screen::Welcome);
    }

    // ========== Handoff Tests ==========

    #[test]
    fn test_proforma_handoff_carries_supplier() {
        let mut app = App::new();
        app.open_proforma_for(sample_supplier());

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Proforma);
        let supplier = state.proforma.supplier.as_ref().unwrap();
        assert_eq!(supplier.id, "sup-001");
        assert!(state.proforma.quote.is_none());
    }

    #[test]
    fn test_onboarding_handoff_preselects_service() {
        let mut app = App::new();
        app.open_onboarding_with_service(4); // Payment Escrow

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Onboarding);
        assert!(state.onboarding.selected_services[4]);
        assert!(!state.onboarding.selected_services[0]);
    }

    #[test]
    fn test_proforma_service_link_opens_onboarding() {
        let mut app = App::new();
        app.open_proforma_for(sample_supplier());
        app.open_onboarding_with_service(2); // Shipping & Logistics

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Onboarding);
        assert!(state.onboarding.selected_services[2]);
        assert!(!state.onboarding.submitted);
        // The supplier stays on the proforma screen for the return trip
        assert!(state.proforma.supplier.is_some());
    }

    #[test]
    fn test_account_handoff_prefills_topup() {
        let mut app = App::new();
        app.open_account_with_quote(1_006_000.0, Currency::Ngn, 4800.0);

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Account);
        assert_eq!(state.account.topup_amount_input, "1006000.00");
        assert_eq!(state.account.topup_currency, Currency::Ngn);
        assert_eq!(state.account.incoming_cny, Some(4800.0));
    }

    // ========== Exchange Handler Tests ==========

    #[test]
    fn test_currency_select_resets_ticker() {
        let mut app = App::new();
        app.handle_currency_select(Currency::Kes);

        let state = app.state.read();
        assert_eq!(state.exchange.ticker.currency(), Currency::Kes);
        assert_eq!(state.exchange.ticker.displayed(), Currency::Kes.base_rate());
    }

    #[test]
    fn test_premium_toggle_switches_lock_tier() {
        let mut app = App::new();
        app.handle_premium_toggle(true);

        let state = app.state.read();
        assert!(state.exchange.premium);
        assert_eq!(state.exchange.lock.tier(), Tier::Premium);
        // The running countdown is not disturbed by the tier switch
        assert_eq!(state.exchange.lock.remaining_secs(), 15);
    }

    #[test]
    fn test_tier_and_currency_changes_ignored_while_locked() {
        let mut app = App::new();
        app.handle_rate_lock_toggle();
        app.handle_premium_toggle(true);
        app.handle_currency_select(Currency::Ghs);

        let state = app.state.read();
        assert!(state.exchange.lock.is_locked());
        assert!(!state.exchange.premium);
        assert_eq!(state.exchange.ticker.currency(), Currency::Ngn);
    }

    #[test]
    fn test_rate_lock_toggle_round_trip() {
        let mut app = App::new();
        app.handle_rate_lock_toggle();
        assert!(app.state.read().exchange.lock.is_locked());

        app.handle_rate_lock_toggle();
        let state = app.state.read();
        assert!(!state.exchange.lock.is_locked());
        assert_eq!(state.exchange.lock.remaining_secs(), 15);
    }

    // ========== Timer Tests ==========

    #[test]
    fn test_ticker_advances_on_exchange_screen() {
        let mut app = App::new();
        app.handle_screen_change(Screen::Exchange);
        let mut rng = StdRng::seed_from_u64(9);

        let start = Instant::now();
        {
            let mut state = app.state.write();
            state.exchange.last_ticker_step = start;
            state.exchange.last_countdown_step = start;
        }
        let before = app.state.read().exchange.ticker.displayed();

        app.advance_exchange_timers(start + Duration::from_secs(3), &mut rng);

        let state = app.state.read();
        assert_ne!(state.exchange.ticker.displayed(), before);
        assert_eq!(state.exchange.lock.remaining_secs(), 12);
    }

    #[test]
    fn test_timers_idle_off_exchange_screen() {
        let mut app = App::new();
        let mut rng = StdRng::seed_from_u64(9);
        let before = app.state.read().exchange.ticker.displayed();

        app.advance_exchange_timers(Instant::now() + Duration::from_secs(10), &mut rng);

        let state = app.state.read();
        assert_eq!(state.exchange.ticker.displayed(), before);
        assert_eq!(state.exchange.lock.remaining_secs(), 15);
    }

    #[test]
    fn test_timers_frozen_while_locked() {
        let mut app = App::new();
        app.handle_screen_change(Screen::Exchange);
        app.handle_rate_lock_toggle();
        let mut rng = StdRng::seed_from_u64(9);
        let before = app.state.read().exchange.ticker.displayed();

        app.advance_exchange_timers(Instant::now() + Duration::from_secs(30), &mut rng);

        let state = app.state.read();
        assert_eq!(state.exchange.ticker.displayed(), before);
        assert_eq!(state.exchange.lock.remaining_secs(), 15);
    }

    // ========== Event Handling Tests ==========

    #[test]
    fn test_suppliers_result_applies_to_matching_seq() {
        let mut app = App::new();
        {
            let mut state = app.state.write();
            state.suppliers.searching = true;
            state.suppliers.request_seq = 3;
        }

        app.handle_event(AppEvent::SuppliersResult {
            seq: 3,
            result: Ok(vec![sample_supplier()]),
        });

        let state = app.state.read();
        assert!(!state.suppliers.searching);
        assert!(state.suppliers.searched);
        assert_eq!(state.suppliers.results.len(), 1);
    }

    #[test]
    fn test_stale_suppliers_result_discarded() {
        let mut app = App::new();
        {
            let mut state = app.state.write();
            state.suppliers.searching = true;
            state.suppliers.request_seq = 4;
        }

        app.handle_event(AppEvent::SuppliersResult {
            seq: 3,
            result: Ok(vec![sample_supplier()]),
        });

        let state = app.state.read();
        assert!(state.suppliers.searching);
        assert!(state.suppliers.results.is_empty());
    }

    #[test]
    fn test_cancelled_proforma_result_discarded() {
        let mut app = App::new();

        // generating is false: the request was cancelled by leaving the screen
        app.handle_event(AppEvent::ProformaResult(Ok(shared::dto::trade::ProformaQuote {
            reference: "PF-20260826-123".to_string(),
            url: "https://docs.shapshap.example/proforma/PF-20260826-123.pdf".to_string(),
            total_cost_usd: 900.0,
            issued_at: "2026-08-26T12:00:00Z".parse().unwrap(),
        })));

        assert!(app.state.read().proforma.quote.is_none());
    }

    #[test]
    fn test_opportunities_error_surfaces() {
        let mut app = App::new();
        {
            let mut state = app.state.write();
            state.opportunities.loading = true;
        }

        app.handle_event(AppEvent::OpportunitiesResult(Err("timeout".to_string())));

        let state = app.state.read();
        assert!(!state.opportunities.loading);
        assert!(state.opportunities.loaded);
        assert_eq!(state.opportunities.error.as_deref(), Some("timeout"));
    }

    // Runs against the global runtime, so the mock's real latency applies
    #[tokio::test]
    async fn test_supplier_search_task_round_trip() {
        let mut app = App::new();
        app.handle_supplier_query_input("generators".to_string());
        app.handle_supplier_search();
        assert!(app.state.read().suppliers.searching);

        // Drain the channel once the mock latency elapses
        let event = app.event_rx.recv().await.unwrap();
        app.handle_event(event);

        let state = app.state.read();
        assert!(!state.suppliers.searching);
        assert_eq!(state.suppliers.results.len(), 5);
        assert!(state.suppliers.results.iter().all(|s| s.product == "generators"));
    }

    // ========== Transfer Tests ==========

    #[test]
    fn test_transfer_failures_leave_balance_untouched() {
        let mut app = App::new();

        // Missing recipient
        app.handle_send_amount_input("40".to_string());
        app.handle_transfer_submit();
        {
            let state = app.state.read();
            assert_eq!(state.account.cny_balance, 100.0);
            assert_eq!(
                state.account.transfer_error,
                Some(ValidationError::missing("recipient"))
            );
        }

        // Garbage amount
        app.handle_recipient_input("ACC-889".to_string());
        app.handle_send_amount_input("lots".to_string());
        app.handle_transfer_submit();
        {
            let state = app.state.read();
            assert_eq!(state.account.cny_balance, 100.0);
            assert_eq!(state.account.transfer_error, Some(ValidationError::InvalidAmount));
        }

        // Over balance
        app.handle_send_amount_input("250".to_string());
        app.handle_transfer_submit();
        {
            let state = app.state.read();
            assert_eq!(state.account.cny_balance, 100.0);
            assert_eq!(
                state.account.transfer_error,
                Some(ValidationError::InsufficientBalance)
            );
        }
    }

    #[test]
    fn test_valid_transfer_debits_exactly() {
        let mut app = App::new();
        app.handle_recipient_input("ACC-889".to_string());
        app.handle_send_amount_input("40".to_string());
        app.handle_transfer_submit();

        let state = app.state.read();
        assert!(state.account.transfer_confirmed);
        assert_eq!(state.account.cny_balance, 60.0);
        assert!(state.account.transfer_error.is_none());
        assert!(state.account.recipient_input.is_empty());
    }

    // ========== Top-Up Tests ==========

    #[test]
    fn test_topup_requires_method_and_account() {
        let mut app = App::new();
        app.handle_topup_submit();
        assert_eq!(
            app.state.read().account.topup_error,
            Some(ValidationError::missing("payment method"))
        );

        app.handle_payment_method_select(PaymentMethod::MobileMoney);
        app.handle_topup_submit();
        assert_eq!(
            app.state.read().account.topup_error,
            Some(ValidationError::missing("account number"))
        );

        app.handle_account_number_input("0788112233".to_string());
        app.handle_topup_submit();
        let state = app.state.read();
        assert!(state.account.topup_confirmed);
        assert!(state.account.topup_error.is_none());
        assert!(state.account.account_number.is_empty());
    }

    // ========== Onboarding Tests ==========

    #[test]
    fn test_onboarding_rejects_incomplete_form() {
        let mut app = App::new();
        app.handle_onboarding_submit();

        let state = app.state.read();
        assert!(!state.onboarding.submitted);
        assert!(state
            .onboarding
            .errors
            .contains(&ValidationError::missing("full name")));
        assert!(state
            .onboarding
            .errors
            .contains(&ValidationError::missing("services")));
    }

    #[test]
    fn test_onboarding_accepts_complete_form() {
        let mut app = App::new();
        app.handle_onboarding_field(OnboardingField::FullName, "Amina Diallo".to_string());
        app.handle_onboarding_field(OnboardingField::Email, "amina@imports.sn".to_string());
        app.handle_service_toggle(0);
        app.handle_onboarding_submit();

        let state = app.state.read();
        assert!(state.onboarding.submitted);
        assert!(state.onboarding.errors.is_empty());
    }

    // ========== Settings Tests ==========

    #[test]
    fn test_language_toggle_flips_and_persists() {
        let mut app = App::new();
        let path = std::env::temp_dir().join(format!(
            "shapshap-app-lang-{}.json",
            std::process::id()
        ));
        app.state.write().settings.config_path = path.to_string_lossy().to_string();
        let initial = app.state.read().settings.language;

        app.handle_language_toggle();

        {
            let state = app.state.read();
            assert_eq!(state.settings.language, initial.toggled());
            assert!(!state.settings.unsaved_changes);
        }
        let saved = handlers::settings::load_settings(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(saved.language, initial.toggled());
    }

    #[test]
    fn test_settings_panel_toggle() {
        let mut app = App::new();
        assert!(!app.state.read().settings.panel_open);

        app.handle_settings_panel_toggle();
        assert!(app.state.read().settings.panel_open);

        app.handle_settings_panel_toggle();
        assert!(!app.state.read().settings.panel_open);
    }

    #[test]
    fn test_theme_change_flags_unsaved_until_saved() {
        let mut app = App::new();
        let path = std::env::temp_dir().join(format!(
            "shapshap-app-theme-{}.json",
            std::process::id()
        ));
        app.state.write().settings.config_path = path.to_string_lossy().to_string();

        let mut config = crate::ui::theme::ThemeConfig::default();
        config.primary = [10, 20, 30];
        app.handle_theme_color_change(config.clone());
        assert!(app.state.read().settings.unsaved_changes);

        app.handle_settings_save();
        {
            let state = app.state.read();
            assert!(!state.settings.unsaved_changes);
            assert_eq!(state.settings.theme_config, config);
        }
        std::fs::remove_file(&path).ok();
    }
}

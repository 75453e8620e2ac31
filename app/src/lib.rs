//! # ShapShap - Cross-Border Trade Desktop App
//!
//! A **native desktop GUI** for African importers trading with Chinese
//! suppliers: supplier discovery, proforma invoicing, trader onboarding, a
//! trade-opportunities feed, and a currency exchange calculator with a live
//! rate ticker and rate locking.
//!
//! ## Architecture
//!
//! ### Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              shapshap (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  egui          - Immediate-mode GUI framework          │
//! │  eframe        - Native window framework               │
//! │  Tokio         - Async runtime for provider calls      │
//! │  async-channel - Task results back to the UI thread    │
//! │  tracing       - Structured logging                    │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ TradeDataProvider (async trait)
//!          ▼
//! ┌─────────────────────────────────────────┐
//! │  MockDataProvider                       │
//! │  (deterministic catalog, real latency)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Application state and screen management
//!   - Core orchestrator of the GUI
//!   - Event-driven architecture with async tasks
//!   - Screen navigation and typed cross-screen handoffs
//!
//! - **core**: Error taxonomy and the `TradeDataProvider` seam
//!
//! - **exchange**: Pure FX domain logic
//!   - `currency`: Supported corridor currencies and base rates
//!   - `calculator`: Fee schedule and quote computation
//!   - `ticker`: Random-walk live rate simulation
//!   - `rate_lock`: Looping rate-guarantee countdown
//!
//! - **services**: Data providers behind the `TradeDataProvider` trait
//!
//! - **ui**: Rendering framework
//!   - `screens`: Screen-specific rendering
//!   - `widgets`: Shared components (nav bar, forms, cards)
//!   - `theme`: Color palette and styling
//!   - `i18n`: English and French string tables
//!
//! - **utils**: Validation rules, global Tokio runtime, logging setup
//!
//! ## Core Concepts
//!
//! ### Event-Driven Architecture
//!
//! The application uses **async channels** for communication:
//! - Main thread: Handles input and rendering (single-threaded)
//! - Async tasks: Provider calls with simulated latency (multi-threaded)
//!
//! Events flow from async tasks back to the main thread via the `AppEvent`
//! enum, tagged so stale results are discarded.
//!
//! ### State Management
//!
//! Application state is wrapped in `Arc<RwLock<AppState>>`:
//! - **Thread-safe**: Multiple readers, exclusive writers
//! - **Shared**: Accessible from async tasks
//! - **Locked briefly**: Minimize contention, drop locks immediately

pub mod app;
pub mod core;
pub mod exchange;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, AppState, Screen};
pub use core::{AppError, Result};

//! # Exchange Domain Logic
//!
//! Pure FX logic, kept free of UI and async concerns so every rule is unit
//! testable:
//!
//! - [`currency`]: Supported corridor currencies and indicative base rates
//! - [`calculator`]: Fee schedule and full quote computation
//! - [`ticker`]: Random-walk simulation of the live rate
//! - [`rate_lock`]: Looping rate-guarantee countdown
//!
//! ## Data Flow
//!
//! ```text
//! Currency ──base_rate──▶ RateTicker ──displayed──▶ Quote::compute
//!                              │                        ▲
//!                              └──frozen while──▶ RateLock
//! ```

pub mod calculator;
pub mod currency;
pub mod rate_lock;
pub mod ticker;

pub use calculator::{FeeSchedule, Quote};
pub use currency::Currency;
pub use rate_lock::{RateLock, Tier};
pub use ticker::{RateTicker, Trend};

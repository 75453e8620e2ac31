//! # Event Handlers
//!
//! User-action handlers organized by domain for better modularity and testability.

pub mod account;
pub mod exchange;
pub mod navigation;
pub mod onboarding;
pub mod settings;

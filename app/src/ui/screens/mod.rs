//! # Screen Modules
//!
//! Each screen renders from an [`crate::app::AppState`] snapshot and
//! dispatches user actions back through [`crate::app::App`] handler methods.
//! Screens never hold the state lock while rendering.

pub mod account;
pub mod exchange;
pub mod onboarding;
pub mod opportunities;
pub mod proforma;
pub mod suppliers;
pub mod welcome;

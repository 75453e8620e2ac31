//! # Reusable Widgets
//!
//! Shared UI components used across screens for a consistent look.

pub mod cards;
pub mod forms;
pub mod nav_bar;

//! # Core Abstractions
//!
//! Foundational types shared across the application:
//!
//! - [`error`]: Consolidated error types ([`AppError`], [`ValidationError`])
//! - [`service`]: Service traits for dependency injection ([`service::TradeDataProvider`])

pub mod error;
pub mod service;

pub use error::{AppError, Result, ValidationError};

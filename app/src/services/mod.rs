//! # Service Integrations
//!
//! Concrete implementations of the service traits in [`crate::core::service`].
//!
//! - **[`provider`]**: Bundled mock trade data provider with simulated latency

pub mod provider;

pub use provider::MockDataProvider;

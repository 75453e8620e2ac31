//! Global Tokio runtime for background tasks.
//!
//! `eframe` owns the main thread, but provider calls and their simulated
//! latency need a tokio context. Tasks spawn onto this static runtime and
//! report back over the app's event channel.
//!
//! Usage:
//! ```rust,ignore
//! use crate::utils::runtime::TOKIO_RT;
//!
//! TOKIO_RT.spawn(async move {
//!     let result = provider.get_opportunities().await;
//!     let _ = event_tx.send(AppEvent::OpportunitiesResult(result)).await;
//! });
//! ```

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for background tasks")
});

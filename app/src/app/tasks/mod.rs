//! # Async Tasks
//!
//! Background tasks spawned onto the global Tokio runtime. Each task takes a
//! brief write lock to flag the work in-flight, clones the provider handle,
//! then sends its result back over the event channel.

pub mod opportunities;
pub mod proforma;
pub mod suppliers;

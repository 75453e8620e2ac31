//! File-based logging initialization

use std::fs;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// Sets up file-based logging with:
/// - Daily log rotation
/// - Non-blocking writes to prevent UI lag
/// - Filter configurable via `RUST_LOG`
///
/// Logs are written to `logs/shapshap.log`. The returned guard must be held
/// for the lifetime of the process so buffered log lines are flushed.
pub fn init() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = "logs";

    if let Err(e) = fs::create_dir_all(log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(log_dir, "shapshap.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("shapshap=info,warn"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI codes in log files

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized - writing to {}/shapshap.log", log_dir);

    Some(guard)
}

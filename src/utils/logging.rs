//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the EventHub application.

use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration.
///
/// The returned guard must be held for the lifetime of the process so the
/// file appender flushes on shutdown.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "eventhub.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log registration mutations with structured data
pub fn log_registration_action(event_id: i64, user_id: i64, action: &str) {
    info!(
        event_id = event_id,
        user_id = user_id,
        action = action,
        "Registration action performed"
    );
}

/// Log event queries
pub fn log_event_query(total: i64, page: i64, duration_ms: u64) {
    debug!(
        total = total,
        page = page,
        duration_ms = duration_ms,
        "Event query executed"
    );
}

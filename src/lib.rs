//! EventHub
//!
//! Event discovery and seat-based registration backend. This library provides
//! the filtered event listing (query builder), the seat/attendee registration
//! engine, and the HTTP surface they are exposed through.

pub mod config;
pub mod database;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{EventHubError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use handlers::AppState;
pub use services::ServiceFactory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{NAME} v{VERSION}")
}

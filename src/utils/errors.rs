//! Error handling for EventHub
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Main error type for the EventHub application
#[derive(Error, Debug)]
pub enum EventHubError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: i64 },

    #[error("Already registered for this event")]
    AlreadyRegistered { event_id: i64 },

    #[error("Not registered for this event")]
    NotRegistered { event_id: i64 },

    #[error("No seats available")]
    SoldOut { event_id: i64 },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for EventHub operations
pub type Result<T> = std::result::Result<T, EventHubError>;

impl EventHubError {
    /// HTTP status code the error surfaces with
    pub fn status_code(&self) -> StatusCode {
        match self {
            EventHubError::EventNotFound { .. } | EventHubError::UserNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            EventHubError::AlreadyRegistered { .. }
            | EventHubError::NotRegistered { .. }
            | EventHubError::SoldOut { .. }
            | EventHubError::Validation(_) => StatusCode::BAD_REQUEST,
            EventHubError::Authentication(_) => StatusCode::UNAUTHORIZED,
            EventHubError::Database(_)
            | EventHubError::Migration(_)
            | EventHubError::Config(_)
            | EventHubError::Serialization(_)
            | EventHubError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed to API clients. Internal failures are not leaked.
    pub fn client_message(&self) -> String {
        match self {
            EventHubError::Database(_)
            | EventHubError::Migration(_)
            | EventHubError::Config(_)
            | EventHubError::Serialization(_)
            | EventHubError::Io(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for EventHubError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(serde_json::json!({ "message": self.client_message() }));
        (status, body).into_response()
    }
}

//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{EventHubError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_database_config(&settings.database)?;
    validate_auth_config(&settings.auth)?;
    validate_pagination_config(&settings.pagination)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(EventHubError::Config(
            "Server host is required".to_string(),
        ));
    }

    if config.port == 0 {
        return Err(EventHubError::Config(
            "Server port must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(EventHubError::Config(
            "Database URL is required".to_string(),
        ));
    }

    if config.max_connections == 0 {
        return Err(EventHubError::Config(
            "Max connections must be greater than 0".to_string(),
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(EventHubError::Config(
            "Min connections cannot be greater than max connections".to_string(),
        ));
    }

    Ok(())
}

/// Validate auth configuration
fn validate_auth_config(config: &super::AuthConfig) -> Result<()> {
    if config.jwt_secret.is_empty() {
        return Err(EventHubError::Config(
            "JWT secret is required".to_string(),
        ));
    }

    Ok(())
}

/// Validate pagination configuration
fn validate_pagination_config(config: &super::PaginationConfig) -> Result<()> {
    if config.default_limit < 1 {
        return Err(EventHubError::Config(
            "Default page limit must be at least 1".to_string(),
        ));
    }

    if config.max_limit < config.default_limit {
        return Err(EventHubError::Config(
            "Max page limit cannot be smaller than the default limit".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(EventHubError::Config(
            "Log level is required".to_string(),
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(EventHubError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.auth.jwt_secret = "test-secret".to_string();
        settings
    }

    #[test]
    fn test_valid_settings_pass() {
        assert!(validate_settings(&valid_settings()).is_ok());
    }

    #[test]
    fn test_missing_jwt_secret_rejected() {
        let mut settings = valid_settings();
        settings.auth.jwt_secret = String::new();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_bad_connection_bounds_rejected() {
        let mut settings = valid_settings();
        settings.database.min_connections = 20;
        settings.database.max_connections = 5;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_bad_pagination_rejected() {
        let mut settings = valid_settings();
        settings.pagination.default_limit = 0;
        assert!(validate_settings(&settings).is_err());

        let mut settings = valid_settings();
        settings.pagination.max_limit = 5;
        settings.pagination.default_limit = 12;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut settings = valid_settings();
        settings.logging.level = "verbose".to_string();
        assert!(validate_settings(&settings).is_err());
    }
}

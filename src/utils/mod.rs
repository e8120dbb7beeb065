//! Utility modules
//!
//! This module contains shared utilities for error handling and logging

pub mod errors;
pub mod logging;

pub use errors::{EventHubError, Result};

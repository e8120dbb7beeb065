//! Request middleware
//!
//! This module provides authentication middleware for protected routes

pub mod auth;

pub use auth::{AuthKeys, AuthUser, Claims};

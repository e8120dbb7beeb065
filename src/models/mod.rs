//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod event;
pub mod user;

// Re-export commonly used models
pub use event::{
    CreateEventRequest, Event, EventCategory, EventFilter, EventPage, EventSearch, MyEvents,
};
pub use user::{CreateUserRequest, User};

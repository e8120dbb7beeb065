//! Services module
//!
//! This module contains the business logic services

pub mod event;
pub mod registration;

pub use event::EventService;
pub use registration::RegistrationService;

use crate::config::Settings;
use crate::database::{DatabasePool, DatabaseService};

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub events: EventService,
    pub registrations: RegistrationService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(pool: DatabasePool, settings: &Settings) -> Self {
        let database = DatabaseService::new(pool.clone());

        let events = EventService::new(database.events.clone(), settings.pagination.clone());
        let registrations =
            RegistrationService::new(pool, database.events.clone(), database.users.clone());

        Self {
            events,
            registrations,
        }
    }
}

//! Database service layer
//!
//! This module bundles the repositories over a shared connection pool.

use crate::database::{DatabasePool, EventRepository, UserRepository};

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub events: EventRepository,
    pub users: UserRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            events: EventRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }
}

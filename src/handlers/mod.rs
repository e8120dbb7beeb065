//! HTTP route handlers
//!
//! This module wires the axum router: public listing routes, protected
//! registration routes, and the health probe.

pub mod events;
pub mod extract;
pub mod registration;
pub mod system;

use std::sync::Arc;

use axum::extract::FromRef;
use axum::routing::{get, post};
use axum::Router;

use crate::database::DatabasePool;
use crate::middleware::AuthKeys;
use crate::services::ServiceFactory;

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<ServiceFactory>,
    pub auth: AuthKeys,
    pub pool: DatabasePool,
}

impl AppState {
    pub fn new(services: ServiceFactory, auth: AuthKeys, pool: DatabasePool) -> Self {
        Self {
            services: Arc::new(services),
            auth,
            pool,
        }
    }
}

impl FromRef<AppState> for AuthKeys {
    fn from_ref(state: &AppState) -> AuthKeys {
        state.auth.clone()
    }
}

/// Build the full application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route(
            "/events",
            get(events::list_events).post(events::create_event),
        )
        .route("/events/my/events", get(registration::my_events))
        .route("/events/:id", get(events::get_event))
        .route(
            "/events/:id/register",
            post(registration::register).delete(registration::cancel),
        )
        .with_state(state)
}

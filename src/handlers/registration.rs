//! Registration handlers
//!
//! All three routes operate on the authenticated caller's identity.

use axum::extract::{Path, State};
use axum::Json;
use serde_json::json;

use crate::handlers::AppState;
use crate::middleware::AuthUser;
use crate::models::event::MyEvents;
use crate::utils::errors::Result;

/// `POST /events/:id/register`
pub async fn register(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>> {
    let event = state
        .services
        .registrations
        .register(id, user.user_id)
        .await?;

    Ok(Json(json!({
        "message": "Successfully registered for event",
        "event": event,
    })))
}

/// `DELETE /events/:id/register`
pub async fn cancel(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>> {
    let event = state
        .services
        .registrations
        .cancel(id, user.user_id)
        .await?;

    Ok(Json(json!({
        "message": "Registration cancelled successfully",
        "event": event,
    })))
}

/// `GET /events/my/events` — the caller's dashboard partition
pub async fn my_events(State(state): State<AppState>, user: AuthUser) -> Result<Json<MyEvents>> {
    let my_events = state
        .services
        .registrations
        .list_my_events(user.user_id)
        .await?;

    Ok(Json(my_events))
}

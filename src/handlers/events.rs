//! Event listing and creation handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::handlers::extract::{AppJson, AppQuery};
use crate::handlers::AppState;
use crate::middleware::AuthUser;
use crate::models::event::{CreateEventRequest, EventFilter, EventPage};
use crate::utils::errors::Result;

/// `GET /events` — filtered, paginated listing (public)
pub async fn list_events(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<EventFilter>,
) -> Result<Json<EventPage>> {
    let page = state.services.events.list(filter).await?;
    Ok(Json(page))
}

/// `GET /events/:id` (public)
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let event = state.services.events.get(id).await?;
    Ok(Json(json!({ "event": event })))
}

/// `POST /events` (authenticated; admin/testing surface, any caller permitted)
pub async fn create_event(
    State(state): State<AppState>,
    _user: AuthUser,
    AppJson(body): AppJson<CreateEventRequest>,
) -> Result<impl IntoResponse> {
    let event = state.services.events.create(body).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Event created successfully",
            "event": event,
        })),
    ))
}

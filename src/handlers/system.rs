//! System handlers

use axum::extract::State;
use axum::Json;
use serde_json::json;

use crate::database;
use crate::handlers::AppState;
use crate::utils::errors::Result;

/// `GET /health` — liveness probe including a store round-trip
pub async fn health(State(state): State<AppState>) -> Result<Json<serde_json::Value>> {
    database::health_check(&state.pool).await?;

    Ok(Json(json!({ "status": "ok" })))
}

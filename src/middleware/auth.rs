//! Authentication middleware
//!
//! Bearer-token identity resolution for protected routes. Token issuance is
//! owned by the external auth service; this extractor only validates the
//! signature and expiry and hands the caller's user id to the handler.

use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::{header, request::Parts, HeaderMap};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::utils::errors::{EventHubError, Result};

/// Claims carried by the external auth service's tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub exp: usize,
}

/// Shared token-validation state
#[derive(Clone)]
pub struct AuthKeys {
    decoding: Arc<DecodingKey>,
}

impl AuthKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

/// The authenticated caller, extracted from the Authorization header
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: i64,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AuthKeys: FromRef<S>,
{
    type Rejection = EventHubError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self> {
        let keys = AuthKeys::from_ref(state);
        let token = extract_bearer(&parts.headers)?;
        let user_id = decode_user_id(token, &keys.decoding)?;

        Ok(AuthUser { user_id })
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str> {
    let header = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| EventHubError::Authentication("Missing authorization header".to_string()))?
        .to_str()
        .map_err(|_| EventHubError::Authentication("Invalid authorization header".to_string()))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| EventHubError::Authentication("Expected bearer token".to_string()))?
        .trim();

    if token.is_empty() {
        return Err(EventHubError::Authentication(
            "Expected bearer token".to_string(),
        ));
    }

    Ok(token)
}

/// Validate the token and return the caller's user id
pub fn decode_user_id(token: &str, key: &DecodingKey) -> Result<i64> {
    let data = decode::<Claims>(token, key, &Validation::default())
        .map_err(|e| EventHubError::Authentication(format!("Invalid token: {e}")))?;

    Ok(data.claims.sub)
}

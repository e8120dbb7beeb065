//! Request extractors with API-contract rejections
//!
//! The stock `Json`/`Query` extractors reject malformed input with a 422 and
//! a plain-text body. These wrappers surface the same failures as a
//! Validation error instead, so every client-caused failure carries the
//! 400 + `{message}` shape.

use axum::async_trait;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::utils::errors::{EventHubError, Result};

#[derive(Debug)]
pub struct AppJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for AppJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = EventHubError;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| EventHubError::Validation(rejection.body_text()))?;

        Ok(AppJson(value))
    }
}

#[derive(Debug)]
pub struct AppQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = EventHubError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self> {
        let axum::extract::Query(value) =
            axum::extract::Query::<T>::from_request_parts(parts, state)
                .await
                .map_err(|rejection: QueryRejection| {
                    EventHubError::Validation(rejection.body_text())
                })?;

        Ok(AppQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;

    use crate::models::event::{CreateEventRequest, EventFilter};

    #[tokio::test]
    async fn test_missing_body_field_is_a_validation_error() {
        let request = Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"organizer": "Nobody"}"#))
            .unwrap();

        let err = AppJson::<CreateEventRequest>::from_request(request, &())
            .await
            .unwrap_err();

        assert!(matches!(err, EventHubError::Validation(_)));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_numeric_page_is_a_validation_error() {
        let request = Request::builder()
            .uri("/events?page=abc")
            .body(Body::empty())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let err = AppQuery::<EventFilter>::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();

        assert!(matches!(err, EventHubError::Validation(_)));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_well_formed_input_passes_through() {
        let request = Request::builder()
            .uri("/events?page=2&limit=5")
            .body(Body::empty())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let AppQuery(filter) = AppQuery::<EventFilter>::from_request_parts(&mut parts, &())
            .await
            .unwrap();

        assert_eq!(filter.page, Some(2));
        assert_eq!(filter.limit, Some(5));
    }
}

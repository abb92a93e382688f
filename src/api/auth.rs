//! Authorization Gate
//!
//! Shared-secret check on the `X-API-Key` header. Attached with
//! `route_layer` so unmatched methods fall through to the 404 unauthenticated.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use super::handlers::AppState;
use crate::error::ApiError;

/// Header carrying the shared secret
pub const API_KEY_HEADER: &str = "x-api-key";

/// Rejects the request with 401 unless exactly one `X-API-Key` header is
/// present and it equals the configured secret byte-for-byte. The store is
/// never touched on rejection.
pub async fn require_api_key(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let mut values = request.headers().get_all(API_KEY_HEADER).iter();
    let authorized = match (values.next(), values.next()) {
        (Some(value), None) => value.as_bytes() == state.config.api_key.as_bytes(),
        _ => false,
    };

    if !authorized {
        warn!(
            method = %request.method(),
            path = %request.uri().path(),
            "Rejected request with missing or invalid API key"
        );
        return ApiError::Unauthorized.into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        middleware::from_fn_with_state,
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::store::MemoryStore;

    async fn dummy_handler() -> StatusCode {
        StatusCode::OK
    }

    fn app() -> Router {
        let state = AppState::new(Arc::new(MemoryStore::new()), Config::with_api_key("s3cret"));
        Router::new()
            .route("/guarded", get(dummy_handler))
            .route_layer(from_fn_with_state(state, require_api_key))
    }

    async fn status_with_key(key: Option<&str>) -> StatusCode {
        let mut builder = Request::builder().uri("/guarded");
        if let Some(key) = key {
            builder = builder.header("X-API-Key", key);
        }
        app()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_matching_key_passes() {
        assert_eq!(status_with_key(Some("s3cret")).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_key_rejected() {
        assert_eq!(status_with_key(None).await, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_repeated_key_header_rejected() {
        let request = Request::builder()
            .uri("/guarded")
            .header("X-API-Key", "s3cret")
            .header("X-API-Key", "other")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_wrong_key_rejected() {
        assert_eq!(status_with_key(Some("S3CRET")).await, StatusCode::UNAUTHORIZED);
        assert_eq!(status_with_key(Some("s3cret ")).await, StatusCode::UNAUTHORIZED);
        assert_eq!(status_with_key(Some("")).await, StatusCode::UNAUTHORIZED);
    }
}

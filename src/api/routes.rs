//! API Routes
//!
//! Configures the Axum router with all endpoints.

use axum::{
    extract::{DefaultBodyLimit, Request},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use super::auth::require_api_key;
use super::docs::{docs_handler, openapi_handler, root_handler};
use super::handlers::{create_name_handler, list_names_handler, not_found_handler, AppState};
use crate::error::ApiError;

/// Value of `Access-Control-Allow-Methods` on every response
pub const CORS_ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Value of `Access-Control-Allow-Headers` on every response
pub const CORS_ALLOW_HEADERS: &str = "Content-Type, X-API-Key";

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `OPTIONS *` - CORS preflight, answered before routing to any handler
/// - `GET /api/names` - List names (API key)
/// - `POST /api/names` - Add a name (API key)
/// - `GET /openapi.json` - OpenAPI document
/// - `GET /docs` - Swagger UI
/// - `GET /` - Banner
///
/// Any other method/path pair gets the plain-text 404, including other
/// methods on known paths and HEAD on GET routes.
///
/// Request bodies on `/api/names` are not size-limited.
///
/// # Middleware
/// - Method gate: empty 200 for every OPTIONS request, 404 for every HEAD
/// - CORS headers: fixed allow-origin/methods/headers on every response
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let names = get(list_names_handler)
        .post(create_name_handler)
        .route_layer(middleware::from_fn_with_state(state.clone(), require_api_key))
        .fallback(not_found_handler)
        .layer(DefaultBodyLimit::disable());

    Router::new()
        .route("/api/names", names)
        .route("/openapi.json", get(openapi_handler).fallback(not_found_handler))
        .route("/docs", get(docs_handler).fallback(not_found_handler))
        .route("/", get(root_handler).fallback(not_found_handler))
        .fallback(not_found_handler)
        .layer(middleware::from_fn(method_gate))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(CORS_ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(CORS_ALLOW_HEADERS),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Answers any OPTIONS request with an empty 200 and rejects HEAD, which
/// axum would otherwise serve from every GET route.
async fn method_gate(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    if request.method() == Method::HEAD {
        return ApiError::NotFound.into_response();
    }
    next.run(request).await
}

//! Documentation endpoints
//!
//! Static payloads embedded at build time from `assets/`.

use axum::{
    http::header,
    response::{Html, IntoResponse},
};

/// OpenAPI 3.0 description of the names API
pub const OPENAPI_DOCUMENT: &str = include_str!("../../assets/openapi.json");

/// Swagger UI page pointed at `/openapi.json`
pub const DOCS_HTML: &str = include_str!("../../assets/docs.html");

/// Body of `GET /`
pub const ROOT_MESSAGE: &str =
    "Names API is running! Visit /docs for interactive API documentation.";

/// Handler for GET /openapi.json
pub async fn openapi_handler() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], OPENAPI_DOCUMENT)
}

/// Handler for GET /docs
pub async fn docs_handler() -> Html<&'static str> {
    Html(DOCS_HTML)
}

/// Handler for GET /
pub async fn root_handler() -> &'static str {
    ROOT_MESSAGE
}

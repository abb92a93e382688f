//! API Module
//!
//! HTTP handlers and routing for the names API.
//!
//! # Endpoints
//! - `OPTIONS *` - CORS preflight
//! - `GET /api/names` - List stored names (API key required)
//! - `POST /api/names` - Add a name (API key required)
//! - `GET /openapi.json` - OpenAPI document
//! - `GET /docs` - Swagger UI
//! - `GET /` - Banner

pub mod auth;
pub mod docs;
pub mod handlers;
pub mod routes;

pub use auth::{require_api_key, API_KEY_HEADER};
pub use handlers::*;
pub use routes::create_router;

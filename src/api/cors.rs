//! CORS policy
//!
//! The mock API is meant to be called from any frontend dev server, so the
//! policy is fully permissive. Mounted as the outermost layer: preflight
//! `OPTIONS` requests are answered here with an empty 2xx and never reach
//! the handlers.

use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

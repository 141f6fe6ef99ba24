use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Creates the CORS layer for the public website API.
///
/// - Any origin
/// - `GET` and `POST` only
/// - `Content-Type` is the only allowed request header
/// - No credentials
pub fn create_public_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

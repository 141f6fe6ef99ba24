//! API routes module
//!
//! This module defines all HTTP routes of the Pasokari API.

pub mod contact;
pub mod health;
pub mod products;
pub mod root;

use axum::Router;
use axum_helpers::server::{create_router, health_router};

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(contact::router(state))
        .merge(products::router(state))
        .merge(health::router(state.clone()))
}

/// The complete application: `/`, `/health`, `/api/*`, docs and fallback.
pub fn build_router(state: &AppState) -> Router {
    let top_level = root::router(state).merge(health_router(state.config.app));
    create_router::<ApiDoc>(top_level, routes(state))
}

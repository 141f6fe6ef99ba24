//! Products API routes
//!
//! This module wires up the catalog domain to HTTP routes.

use axum::Router;
use domain_catalog::{CatalogService, MongoCategoryRepository, handlers};
use tracing::{info, warn};

use crate::state::AppState;

/// Create the products router
pub fn router(state: &AppState) -> Router {
    let repository = MongoCategoryRepository::new(&state.db);
    handlers::router(CatalogService::new(repository))
}

/// Create the unique index on category keys.
///
/// Startup continues without it; duplicates are then only prevented by
/// seeding's delete-all.
pub async fn init_indexes(db: &mongodb::Database) {
    match MongoCategoryRepository::new(db).init_indexes().await {
        Ok(()) => info!("Category collection indexes created"),
        Err(e) => warn!(error = %e, "Failed to create category indexes"),
    }
}

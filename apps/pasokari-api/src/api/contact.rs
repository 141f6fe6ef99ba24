//! Contact API routes
//!
//! This module wires up the inquiries domain to HTTP routes.

use axum::Router;
use domain_inquiries::{InquiryService, MongoInquiryRepository, handlers};

use crate::state::AppState;

/// Create the contact router
pub fn router(state: &AppState) -> Router {
    let repository = MongoInquiryRepository::new(state.db.clone());
    let service = InquiryService::new(repository).with_notifier(state.notifier.clone());

    handlers::router(service)
}

//! Application state management.
//!
//! This module defines the shared application state passed to all request handlers.

use domain_notifications::EmailNotifier;
use mongodb::{Client, Database};

/// Shared application state.
///
/// This struct is cloned for each handler (inexpensive Arc clones), providing access to:
/// - Application configuration
/// - MongoDB client and database
/// - The owner notifier
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
    /// Sends inquiry notifications through the configured transport
    pub notifier: EmailNotifier,
}

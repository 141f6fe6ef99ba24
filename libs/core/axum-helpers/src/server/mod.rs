//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with OpenAPI docs, CORS, body limit and request tracing
//! - The `/health` liveness endpoint
//! - Serving with graceful shutdown on SIGINT/SIGTERM
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{server::ServerConfig, app_info};
//!
//! let routes = Router::new().merge(health_router(app_info!()));
//! let router = create_router::<ApiDoc>(routes, api_routes);
//! create_app(router, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

// Re-export commonly used types and functions
pub use app::{MAX_BODY_BYTES, create_app, create_router};
pub use health::{HealthResponse, health_router};
pub use shutdown::shutdown_signal;

//! # Axum Helpers
//!
//! Utilities shared by the HTTP surface of the API.
//!
//! ## Modules
//!
//! - **[`envelope`]**: the `{success, message}` body every endpoint answers with
//! - **[`errors`]**: `AppError`, which logs internal detail and renders the envelope
//! - **[`extractors`]**: JSON extractor whose rejections use the envelope
//! - **[`http`]**: CORS configuration
//! - **[`server`]**: router assembly, health endpoint, serve with graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::{Router, routing::get};
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! let routes = Router::new().route("/", get(|| async { "ready" }));
//! let router = create_router::<ApiDoc>(routes, Router::new());
//! create_app(router, &ServerConfig::default()).await?;
//! ```

pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use envelope::ApiMessage;
pub use errors::AppError;
pub use extractors::JsonBody;
pub use http::create_public_cors_layer;
pub use server::{MAX_BODY_BYTES, create_app, create_router, health_router, shutdown_signal};

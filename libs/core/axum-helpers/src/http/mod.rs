//! HTTP middleware module.
//!
//! The site's frontend is served from another origin, so the API answers
//! CORS requests from anywhere.

pub mod cors;

pub use cors::create_public_cors_layer;

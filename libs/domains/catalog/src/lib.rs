//! Catalog Domain
//!
//! Product categories with localized product names (`id` for Indonesian,
//! `en` for English), read by the website and replaced wholesale by seeding.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← GET /products, POST /products/seed
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Reshaping, payload parsing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Category, CategoryProducts, CategoryDocument
//! └─────────────┘
//! ```
//!
//! Seeding is destructive and not transactional: every existing category is
//! deleted before the new ones are inserted.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{CatalogError, CatalogResult};
pub use handlers::ApiDoc;
pub use models::{Category, CategoryProducts, ProductCatalog};
pub use mongodb::MongoCategoryRepository;
pub use repository::CategoryRepository;
pub use service::CatalogService;

//! Database library providing the MongoDB connector used by the API.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB support
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::new("mongodb://localhost:27017/pasokari");
//! let client = mongodb::connect_from_config(&config).await?;
//! let db = mongodb::database_for(&client, &config);
//! ```

#[cfg(feature = "mongodb")]
pub mod mongodb;

//! Inquiries Domain
//!
//! Contact-form submissions from the public website: persisted to MongoDB,
//! then announced to the owner by email.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← POST /contact
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Presence check, persist, dispatch notification
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Inquiry, NewInquiry, ContactRequest
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_inquiries::{handlers, mongodb::MongoInquiryRepository, service::InquiryService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("pasokari");
//!
//! let service = InquiryService::new(MongoInquiryRepository::new(db));
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{InquiryError, InquiryResult};
pub use handlers::ApiDoc;
pub use models::{ContactRequest, Inquiry, NewInquiry};
pub use mongodb::MongoInquiryRepository;
pub use repository::InquiryRepository;
pub use service::InquiryService;

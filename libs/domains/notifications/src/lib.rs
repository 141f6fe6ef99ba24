//! Notifications Domain
//!
//! Sends the owner an email whenever a visitor submits the contact form.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ InquiryService  │  ← Persists first, then dispatches
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │  EmailNotifier  │  ← Renders templates, spawns the send
//! └────────┬────────┘
//!          │
//! ┌────────▼────────┐
//! │ Email Provider  │  ← SMTP, SendGrid (or Mock in tests)
//! └─────────────────┘
//! ```
//!
//! Delivery is fire-and-forget: the caller never waits for the provider and
//! never sees its errors. Outcomes are only logged.
//!
//! # Usage
//!
//! ```rust,ignore
//! use core_config::FromEnv;
//! use domain_notifications::{EmailConfig, EmailNotifier, InquiryNotification};
//!
//! let notifier = EmailNotifier::from_config(&EmailConfig::from_env()?)?;
//! notifier.dispatch_inquiry(InquiryNotification {
//!     name: "Budi".into(),
//!     phone: "08123".into(),
//!     email: "a@b.com".into(),
//!     message: "Hi".into(),
//! });
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod notifier;
pub mod providers;
pub mod templates;

pub use config::{EmailConfig, EmailTransport, TransportConfig};
pub use error::{NotificationError, NotificationResult};
pub use models::InquiryNotification;
pub use notifier::{EmailNotifier, Sender};
pub use providers::{
    EmailContent, EmailProvider, MockEmailProvider, SendGridConfig, SendGridProvider, SentEmail,
    SmtpConfig, SmtpProvider,
};
pub use templates::{RenderedEmail, TemplateEngine};

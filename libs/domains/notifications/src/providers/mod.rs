//! Email provider implementations.
//!
//! This module contains the `EmailProvider` trait and implementations
//! for the supported delivery transports.

mod mock;
mod sendgrid;
mod smtp;

pub use mock::MockEmailProvider;
pub use sendgrid::{DEFAULT_SENDGRID_API_URL, SendGridConfig, SendGridProvider};
pub use smtp::{SmtpConfig, SmtpProvider};

use crate::error::NotificationResult;
use async_trait::async_trait;

/// Represents a sent email with provider-specific message ID.
#[derive(Debug, Clone)]
pub struct SentEmail {
    /// Provider-specific message ID for tracking.
    pub message_id: Option<String>,
    /// Whether the email was accepted for delivery.
    pub accepted: bool,
}

/// Email content ready for sending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailContent {
    /// Recipient email address.
    pub to_email: String,
    /// Sender email address.
    pub from_email: String,
    /// Sender display name.
    pub from_name: String,
    /// Email subject.
    pub subject: String,
    /// HTML body content.
    pub html_body: String,
    /// Plain text body content.
    pub text_body: String,
    /// Reply-To email address.
    pub reply_to: Option<String>,
}

/// Trait for email sending providers.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Send an email.
    async fn send(&self, email: &EmailContent) -> NotificationResult<SentEmail>;

    /// Get the provider name for logging.
    fn name(&self) -> &'static str;

    /// Check if the provider is healthy/configured.
    async fn health_check(&self) -> NotificationResult<bool>;
}

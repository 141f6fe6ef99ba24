//! SMTP email provider implementation using lettre.
//!
//! Defaults to a credentialed Gmail relay with implicit TLS. Setting
//! `SMTP_USE_TLS=false` talks plain SMTP, for local catchers like Mailpit.

use super::{EmailContent, EmailProvider, SentEmail};
use crate::error::{NotificationError, NotificationResult};
use async_trait::async_trait;
use core_config::{ConfigError, FromEnv, env_or_default, env_parse_or, env_required};
use lettre::{
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart, SinglePart, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use tracing::{debug, error, info, warn};

pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 465;

/// Port on which the relay expects TLS from the first byte.
const IMPLICIT_TLS_PORT: u16 = 465;

/// SMTP configuration.
#[derive(Clone)]
pub struct SmtpConfig {
    /// SMTP server host.
    pub host: String,
    /// SMTP server port.
    pub port: u16,
    /// SMTP username. Also the default sender address.
    pub username: String,
    /// SMTP password (an app password for Gmail).
    pub password: String,
    /// Whether to use TLS (false for local dev servers).
    pub use_tls: bool,
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"***")
            .field("use_tls", &self.use_tls)
            .finish()
    }
}

impl SmtpConfig {
    /// Create a Gmail configuration for the given account.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            host: DEFAULT_SMTP_HOST.to_string(),
            port: DEFAULT_SMTP_PORT,
            username: username.into(),
            password: password.into(),
            use_tls: true,
        }
    }

    /// Builder method to point at another relay.
    pub fn with_relay(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    /// Builder method to set TLS.
    pub fn with_tls(mut self, use_tls: bool) -> Self {
        self.use_tls = use_tls;
        self
    }
}

impl FromEnv for SmtpConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let username = env_required("EMAIL_USER")?;
        let password = env_required("EMAIL_PASS")?;

        Ok(Self::new(username, password)
            .with_relay(
                env_or_default("SMTP_HOST", DEFAULT_SMTP_HOST),
                env_parse_or("SMTP_PORT", DEFAULT_SMTP_PORT)?,
            )
            .with_tls(env_parse_or("SMTP_USE_TLS", true)?))
    }
}

/// SMTP email provider.
pub struct SmtpProvider {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    config: SmtpConfig,
}

impl SmtpProvider {
    /// Create a new SMTP provider. No connection is made until the first send.
    pub fn new(config: SmtpConfig) -> NotificationResult<Self> {
        let transport = Self::build_transport(&config)?;
        Ok(Self { transport, config })
    }

    /// Build the SMTP transport based on configuration.
    fn build_transport(
        config: &SmtpConfig,
    ) -> NotificationResult<AsyncSmtpTransport<Tokio1Executor>> {
        let credentials = Credentials::new(config.username.clone(), config.password.clone());

        let builder = if !config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
        } else if config.port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host).map_err(|e| {
                NotificationError::ProviderError(format!("Failed to create SMTP relay: {}", e))
            })?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host).map_err(|e| {
                NotificationError::ProviderError(format!("Failed to create SMTP relay: {}", e))
            })?
        };

        Ok(builder.port(config.port).credentials(credentials).build())
    }

    /// Build a lettre Message from EmailContent.
    fn build_message(&self, email: &EmailContent) -> NotificationResult<Message> {
        let from_address: Address = email
            .from_email
            .parse()
            .map_err(|e| NotificationError::InvalidEmail(format!("from: {}", e)))?;
        let from = Mailbox::new(Some(email.from_name.clone()), from_address);

        let to: Mailbox = email
            .to_email
            .parse()
            .map_err(|e| NotificationError::InvalidEmail(format!("to: {}", e)))?;

        let mut builder = Message::builder().from(from).to(to).subject(&email.subject);

        // Reply-To is optional; an unparsable one is dropped.
        if let Some(reply_to) = &email.reply_to {
            match reply_to.parse::<Mailbox>() {
                Ok(mailbox) => builder = builder.reply_to(mailbox),
                Err(e) => warn!(reply_to = %reply_to, error = %e, "Skipping invalid Reply-To"),
            }
        }

        builder
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(email.text_body.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(email.html_body.clone()),
                    ),
            )
            .map_err(|e| {
                NotificationError::ProviderError(format!("Failed to build email message: {}", e))
            })
    }
}

#[async_trait]
impl EmailProvider for SmtpProvider {
    async fn send(&self, email: &EmailContent) -> NotificationResult<SentEmail> {
        debug!(
            to = %email.to_email,
            subject = %email.subject,
            host = %self.config.host,
            port = %self.config.port,
            has_reply_to = email.reply_to.is_some(),
            "Sending email via SMTP"
        );

        let message = self.build_message(email)?;

        let response = self.transport.send(message).await.map_err(|e| {
            error!(
                to = %email.to_email,
                error = %e,
                "Failed to send email via SMTP"
            );
            NotificationError::ProviderError(format!("SMTP send failed: {}", e))
        })?;

        let message_id = response.message().next().map(|s| s.to_string());

        info!(
            to = %email.to_email,
            message_id = ?message_id,
            "Email sent successfully via SMTP"
        );

        Ok(SentEmail {
            message_id,
            accepted: response.is_positive(),
        })
    }

    fn name(&self) -> &'static str {
        "SMTP"
    }

    async fn health_check(&self) -> NotificationResult<bool> {
        self.transport.test_connection().await.map_err(|e| {
            NotificationError::ProviderError(format!("SMTP health check failed: {}", e))
        })
    }
}

//! Mail transport selection and sender/recipient settings.

use crate::providers::{SendGridConfig, SmtpConfig};
use core_config::{ConfigError, FromEnv, env_first, env_or_default};
use strum::{Display, EnumString};

pub const DEFAULT_FROM_NAME: &str = "Pasokari Website";

/// Which delivery transport the service runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EmailTransport {
    Smtp,
    SendGrid,
}

impl EmailTransport {
    /// Human-readable transport name, shown on the root banner.
    pub fn label(&self) -> &'static str {
        match self {
            EmailTransport::Smtp => "SMTP",
            EmailTransport::SendGrid => "SendGrid",
        }
    }

    /// `EMAIL_PROVIDER` if set, otherwise SendGrid when an API key is present.
    fn from_env() -> Result<Self, ConfigError> {
        match env_first(&["EMAIL_PROVIDER"]) {
            Some(raw) => raw.parse().map_err(|e: strum::ParseError| ConfigError::ParseError {
                key: "EMAIL_PROVIDER".to_string(),
                details: format!("{e}: '{raw}' (expected smtp or sendgrid)"),
            }),
            None if env_first(&["SENDGRID_API_KEY"]).is_some() => Ok(EmailTransport::SendGrid),
            None => Ok(EmailTransport::Smtp),
        }
    }
}

/// Transport-specific settings.
#[derive(Debug, Clone)]
pub enum TransportConfig {
    Smtp(SmtpConfig),
    SendGrid(SendGridConfig),
}

impl TransportConfig {
    pub fn kind(&self) -> EmailTransport {
        match self {
            TransportConfig::Smtp(_) => EmailTransport::Smtp,
            TransportConfig::SendGrid(_) => EmailTransport::SendGrid,
        }
    }
}

/// Everything needed to build an [`EmailNotifier`](crate::EmailNotifier).
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub transport: TransportConfig,
    /// Sender address. Defaults to `EMAIL_USER`.
    pub from_email: String,
    pub from_name: String,
    /// Where inquiry notifications go. Defaults to the sender.
    pub to_email: String,
}

impl FromEnv for EmailConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let transport = match EmailTransport::from_env()? {
            EmailTransport::Smtp => TransportConfig::Smtp(SmtpConfig::from_env()?),
            EmailTransport::SendGrid => TransportConfig::SendGrid(SendGridConfig::from_env()?),
        };

        let from_email = env_first(&["EMAIL_FROM", "EMAIL_USER"])
            .ok_or_else(|| ConfigError::MissingEnvVar("EMAIL_FROM".to_string()))?;
        let to_email = env_first(&["EMAIL_TO"]).unwrap_or_else(|| from_email.clone());

        Ok(Self {
            transport,
            from_email,
            from_name: env_or_default("EMAIL_FROM_NAME", DEFAULT_FROM_NAME),
            to_email,
        })
    }
}

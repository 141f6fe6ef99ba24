//! SendGrid email provider implementation.

use super::{EmailContent, EmailProvider, SentEmail};
use crate::error::{NotificationError, NotificationResult};
use async_trait::async_trait;
use core_config::{ConfigError, FromEnv, env_or_default, env_required};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

pub const DEFAULT_SENDGRID_API_URL: &str = "https://api.sendgrid.com/v3";

/// SendGrid API configuration.
#[derive(Clone)]
pub struct SendGridConfig {
    /// SendGrid API key.
    pub api_key: String,
    /// SendGrid API base URL (defaults to production).
    pub api_url: String,
}

impl std::fmt::Debug for SendGridConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendGridConfig")
            .field("api_key", &"***")
            .field("api_url", &self.api_url)
            .finish()
    }
}

impl SendGridConfig {
    /// Create a new SendGrid configuration.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_SENDGRID_API_URL.to_string(),
        }
    }

    /// Builder method to override the API base URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

impl FromEnv for SendGridConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let api_key = env_required("SENDGRID_API_KEY")?;
        Ok(Self::new(api_key).with_api_url(env_or_default(
            "SENDGRID_API_URL",
            DEFAULT_SENDGRID_API_URL,
        )))
    }
}

/// SendGrid email provider.
pub struct SendGridProvider {
    config: SendGridConfig,
    client: Client,
}

impl SendGridProvider {
    /// Create a new SendGrid provider.
    pub fn new(config: SendGridConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/mail/send", self.config.api_url.trim_end_matches('/'))
    }
}

// SendGrid API request/response structures

#[derive(Debug, Serialize)]
struct SendGridRequest {
    personalizations: Vec<Personalization>,
    from: EmailAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<EmailAddress>,
    subject: String,
    content: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Personalization {
    to: Vec<EmailAddress>,
}

#[derive(Debug, Serialize)]
struct EmailAddress {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(rename = "type")]
    content_type: String,
    value: String,
}

#[derive(Debug, Deserialize)]
struct SendGridError {
    errors: Vec<SendGridErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct SendGridErrorDetail {
    message: String,
}

impl From<&EmailContent> for SendGridRequest {
    fn from(email: &EmailContent) -> Self {
        SendGridRequest {
            personalizations: vec![Personalization {
                to: vec![EmailAddress {
                    email: email.to_email.clone(),
                    name: None,
                }],
            }],
            from: EmailAddress {
                email: email.from_email.clone(),
                name: (!email.from_name.is_empty()).then(|| email.from_name.clone()),
            },
            reply_to: email.reply_to.as_ref().map(|addr| EmailAddress {
                email: addr.clone(),
                name: None,
            }),
            subject: email.subject.clone(),
            // SendGrid requires text/plain before text/html.
            content: vec![
                Content {
                    content_type: "text/plain".to_string(),
                    value: email.text_body.clone(),
                },
                Content {
                    content_type: "text/html".to_string(),
                    value: email.html_body.clone(),
                },
            ],
        }
    }
}

#[async_trait]
impl EmailProvider for SendGridProvider {
    async fn send(&self, email: &EmailContent) -> NotificationResult<SentEmail> {
        let request = SendGridRequest::from(email);

        debug!(
            to = %email.to_email,
            subject = %email.subject,
            has_reply_to = email.reply_to.is_some(),
            "Sending email via SendGrid"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let message_id = response
            .headers()
            .get("x-message-id")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        if status.is_success() {
            info!(
                to = %email.to_email,
                message_id = ?message_id,
                "Email sent successfully via SendGrid"
            );
            return Ok(SentEmail {
                message_id,
                accepted: true,
            });
        }

        let error_body = response.text().await.unwrap_or_default();
        error!(
            to = %email.to_email,
            status = %status,
            error = %error_body,
            "Failed to send email via SendGrid"
        );

        let error_message = match serde_json::from_str::<SendGridError>(&error_body) {
            Ok(sg_error) => sg_error
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join(", "),
            Err(_) => error_body,
        };

        Err(NotificationError::ProviderError(format!(
            "SendGrid error ({}): {}",
            status, error_message
        )))
    }

    fn name(&self) -> &'static str {
        "SendGrid"
    }

    async fn health_check(&self) -> NotificationResult<bool> {
        // No dedicated health endpoint; only the key format can be checked.
        if self.config.api_key.starts_with("SG.") {
            Ok(true)
        } else {
            Err(NotificationError::ConfigError(
                "Invalid SendGrid API key format".to_string(),
            ))
        }
    }
}

//! Inquiry notifications: compose, send, or dispatch in the background.

use crate::config::{EmailConfig, TransportConfig};
use crate::error::NotificationResult;
use crate::models::InquiryNotification;
use crate::providers::{EmailContent, EmailProvider, SendGridProvider, SentEmail, SmtpProvider};
use crate::templates::TemplateEngine;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};
use validator::ValidateEmail;

/// Sender and recipient of owner notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub from_email: String,
    pub from_name: String,
    pub to_email: String,
}

impl From<&EmailConfig> for Sender {
    fn from(config: &EmailConfig) -> Self {
        Self {
            from_email: config.from_email.clone(),
            from_name: config.from_name.clone(),
            to_email: config.to_email.clone(),
        }
    }
}

/// Notifies the business owner about new inquiries.
#[derive(Clone)]
pub struct EmailNotifier {
    provider: Arc<dyn EmailProvider>,
    templates: TemplateEngine,
    sender: Sender,
}

impl EmailNotifier {
    pub fn new(provider: Arc<dyn EmailProvider>, sender: Sender) -> NotificationResult<Self> {
        Ok(Self {
            provider,
            templates: TemplateEngine::new()?,
            sender,
        })
    }

    /// Build the provider named by `config` and wrap it.
    pub fn from_config(config: &EmailConfig) -> NotificationResult<Self> {
        let provider: Arc<dyn EmailProvider> = match &config.transport {
            TransportConfig::Smtp(smtp) => Arc::new(SmtpProvider::new(smtp.clone())?),
            TransportConfig::SendGrid(sendgrid) => {
                Arc::new(SendGridProvider::new(sendgrid.clone()))
            }
        };
        Self::new(provider, Sender::from(config))
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Check that the transport is usable. Never fatal: the result is logged
    /// and returned.
    pub async fn verify_transport(&self) -> bool {
        match self.provider.health_check().await {
            Ok(true) => {
                info!(transport = self.provider.name(), "Email transport ready");
                true
            }
            Ok(false) => {
                warn!(transport = self.provider.name(), "Email transport not ready");
                false
            }
            Err(e) => {
                warn!(transport = self.provider.name(), error = %e, "Email transport check failed");
                false
            }
        }
    }

    /// Render the owner email for `inquiry`.
    ///
    /// The visitor's address becomes Reply-To when it is a valid email.
    pub fn compose_inquiry(&self, inquiry: &InquiryNotification) -> NotificationResult<EmailContent> {
        let rendered = self.templates.render_inquiry(inquiry)?;

        Ok(EmailContent {
            to_email: self.sender.to_email.clone(),
            from_email: self.sender.from_email.clone(),
            from_name: self.sender.from_name.clone(),
            subject: rendered.subject,
            html_body: rendered.html,
            text_body: rendered.text,
            reply_to: inquiry
                .email
                .validate_email()
                .then(|| inquiry.email.clone()),
        })
    }

    /// Compose and send, waiting for the provider.
    #[instrument(skip(self, inquiry), fields(provider = self.provider.name(), from = %inquiry.name))]
    pub async fn notify_inquiry(&self, inquiry: &InquiryNotification) -> NotificationResult<SentEmail> {
        let email = self.compose_inquiry(inquiry)?;
        self.provider.send(&email).await
    }

    /// Send on a detached task and return immediately.
    ///
    /// The outcome is only logged. The handle is returned for tests; callers
    /// on the request path drop it.
    pub fn dispatch_inquiry(&self, inquiry: InquiryNotification) -> JoinHandle<()> {
        let notifier = self.clone();
        tokio::spawn(async move {
            match notifier.notify_inquiry(&inquiry).await {
                Ok(sent) => info!(
                    provider = notifier.provider_name(),
                    message_id = ?sent.message_id,
                    "Email notifikasi berhasil terkirim"
                ),
                Err(e) => warn!(
                    provider = notifier.provider_name(),
                    error = %e,
                    "Gagal kirim email notifikasi"
                ),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{MockEmailProvider, SendGridConfig, SmtpConfig};

    fn sender() -> Sender {
        Sender {
            from_email: "web@pasokari.id".to_string(),
            from_name: "Pasokari Website".to_string(),
            to_email: "owner@pasokari.id".to_string(),
        }
    }

    fn budi() -> InquiryNotification {
        InquiryNotification {
            name: "Budi".to_string(),
            phone: "08123".to_string(),
            email: "a@b.com".to_string(),
            message: "Hi".to_string(),
        }
    }

    #[test]
    fn test_compose_addresses_owner() {
        let notifier = EmailNotifier::new(Arc::new(MockEmailProvider::new()), sender()).unwrap();
        let email = notifier.compose_inquiry(&budi()).unwrap();

        assert_eq!(email.to_email, "owner@pasokari.id");
        assert_eq!(email.from_email, "web@pasokari.id");
        assert_eq!(email.subject, "📩 Pesan Baru: Budi");
        assert_eq!(email.reply_to.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_compose_drops_invalid_reply_to() {
        let notifier = EmailNotifier::new(Arc::new(MockEmailProvider::new()), sender()).unwrap();
        let mut inquiry = budi();
        inquiry.email = "budi at home".to_string();

        assert_eq!(notifier.compose_inquiry(&inquiry).unwrap().reply_to, None);
    }

    #[tokio::test]
    async fn test_dispatch_sends_in_background() {
        let mock = MockEmailProvider::new();
        let notifier = EmailNotifier::new(Arc::new(mock.clone()), sender()).unwrap();

        notifier.dispatch_inquiry(budi()).await.unwrap();

        let sent = mock.sent_emails().await;
        assert_eq!(sent.len(), 1);
        assert!(sent[0].html_body.contains("Budi"));
    }

    #[tokio::test]
    async fn test_dispatch_swallows_provider_failure() {
        let mock = MockEmailProvider::failing("port blocked");
        let notifier = EmailNotifier::new(Arc::new(mock.clone()), sender()).unwrap();

        // The task completes normally; the failure is only logged.
        assert!(notifier.dispatch_inquiry(budi()).await.is_ok());
        assert_eq!(mock.sent_count().await, 0);
    }

    #[tokio::test]
    async fn test_notify_surfaces_provider_failure() {
        let notifier =
            EmailNotifier::new(Arc::new(MockEmailProvider::failing("down")), sender()).unwrap();
        assert!(notifier.notify_inquiry(&budi()).await.is_err());
    }

    #[tokio::test]
    async fn test_verify_transport_reports_provider_state() {
        let ready = EmailNotifier::new(Arc::new(MockEmailProvider::new()), sender()).unwrap();
        assert!(ready.verify_transport().await);

        let down =
            EmailNotifier::new(Arc::new(MockEmailProvider::failing("auth")), sender()).unwrap();
        assert!(!down.verify_transport().await);
    }

    #[tokio::test]
    async fn test_from_config_picks_provider() {
        let smtp = EmailConfig {
            transport: TransportConfig::Smtp(SmtpConfig::new("owner@pasokari.id", "secret")),
            from_email: "owner@pasokari.id".to_string(),
            from_name: "Pasokari Website".to_string(),
            to_email: "owner@pasokari.id".to_string(),
        };
        assert_eq!(EmailNotifier::from_config(&smtp).unwrap().provider_name(), "SMTP");

        let sendgrid = EmailConfig {
            transport: TransportConfig::SendGrid(SendGridConfig::new("SG.key")),
            ..smtp
        };
        assert_eq!(
            EmailNotifier::from_config(&sendgrid).unwrap().provider_name(),
            "SendGrid"
        );
    }
}

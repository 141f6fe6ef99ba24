//! Mock email provider for testing

use super::{EmailContent, EmailProvider, SentEmail};
use crate::error::{NotificationError, NotificationResult};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Mock email provider that captures sent emails.
///
/// Clones share the same mailbox, so a test can keep one handle and give
/// another to the code under test.
#[derive(Clone, Default)]
pub struct MockEmailProvider {
    sent_emails: Arc<Mutex<Vec<EmailContent>>>,
    failure_message: Option<String>,
}

impl MockEmailProvider {
    /// Create a new mock provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock provider that always fails
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            sent_emails: Arc::default(),
            failure_message: Some(message.into()),
        }
    }

    /// Get all sent emails
    pub async fn sent_emails(&self) -> Vec<EmailContent> {
        self.sent_emails.lock().await.clone()
    }

    /// Get the count of sent emails
    pub async fn sent_count(&self) -> usize {
        self.sent_emails.lock().await.len()
    }

    /// Wait until at least `count` emails were sent, or `timeout` elapses.
    ///
    /// Returns whether the count was reached.
    pub async fn wait_for_sent(&self, count: usize, timeout: Duration) -> bool {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            if self.sent_count().await >= count {
                return true;
            }
            if tokio::time::Instant::now() >= deadline {
                return false;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }
}

#[async_trait]
impl EmailProvider for MockEmailProvider {
    async fn send(&self, email: &EmailContent) -> NotificationResult<SentEmail> {
        if let Some(message) = &self.failure_message {
            return Err(NotificationError::ProviderError(message.clone()));
        }

        let mut sent = self.sent_emails.lock().await;
        sent.push(email.clone());

        Ok(SentEmail {
            message_id: Some(format!("mock-{}", sent.len())),
            accepted: true,
        })
    }

    fn name(&self) -> &'static str {
        "Mock"
    }

    async fn health_check(&self) -> NotificationResult<bool> {
        Ok(self.failure_message.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> EmailContent {
        EmailContent {
            to_email: "owner@pasokari.id".to_string(),
            subject: "Test Subject".to_string(),
            text_body: "Test body".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_mock_provider_sends_email() {
        let provider = MockEmailProvider::new();

        let sent = provider.send(&email()).await.unwrap();
        assert_eq!(sent.message_id.as_deref(), Some("mock-1"));

        let captured = provider.sent_emails().await;
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].to_email, "owner@pasokari.id");
    }

    #[tokio::test]
    async fn test_mock_provider_fails() {
        let provider = MockEmailProvider::failing("Simulated failure");

        let err = provider.send(&email()).await.unwrap_err();
        assert!(err.to_string().contains("Simulated failure"));
        assert_eq!(provider.sent_count().await, 0);
        assert!(!provider.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_clones_share_mailbox() {
        let provider = MockEmailProvider::new();
        let handle = provider.clone();

        provider.send(&email()).await.unwrap();
        assert!(handle.wait_for_sent(1, Duration::from_millis(100)).await);
        assert!(!handle.wait_for_sent(2, Duration::from_millis(30)).await);
    }
}

//! Inquiry Service - Business logic layer

use domain_notifications::EmailNotifier;
use std::sync::Arc;
use tracing::instrument;

use crate::error::InquiryResult;
use crate::models::{ContactRequest, Inquiry};
use crate::repository::InquiryRepository;

/// Accepts contact submissions.
///
/// Persisting is the only step the caller waits for. The owner notification
/// is dispatched afterwards and its outcome never reaches the caller.
pub struct InquiryService<R: InquiryRepository> {
    repository: Arc<R>,
    notifier: Option<EmailNotifier>,
}

impl<R: InquiryRepository> InquiryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            notifier: None,
        }
    }

    /// Notify the owner about every stored inquiry.
    pub fn with_notifier(mut self, notifier: EmailNotifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Check, store, then dispatch the notification.
    #[instrument(skip(self, request))]
    pub async fn submit(&self, request: ContactRequest) -> InquiryResult<Inquiry> {
        let input = request.into_new_inquiry()?;
        let inquiry = self.repository.create(input).await?;

        if let Some(notifier) = &self.notifier {
            notifier.dispatch_inquiry(inquiry.notification());
        }

        Ok(inquiry)
    }
}

impl<R: InquiryRepository> Clone for InquiryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            notifier: self.notifier.clone(),
        }
    }
}

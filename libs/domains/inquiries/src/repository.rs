use async_trait::async_trait;
use uuid::Uuid;

use crate::error::InquiryResult;
use crate::models::{Inquiry, NewInquiry};

/// Repository trait for Inquiry persistence
///
/// Inquiries are append-only: created once, never updated or deleted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InquiryRepository: Send + Sync {
    /// Validate and store a new inquiry.
    ///
    /// Fails with `Validation` before any write if a field is empty.
    async fn create(&self, input: NewInquiry) -> InquiryResult<Inquiry>;

    /// Get an inquiry by ID
    async fn get_by_id(&self, id: Uuid) -> InquiryResult<Option<Inquiry>>;
}

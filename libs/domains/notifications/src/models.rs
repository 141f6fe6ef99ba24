//! Data carried into notification templates.

use serde::{Deserialize, Serialize};

/// The fields of a stored inquiry that go into the owner's email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryNotification {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

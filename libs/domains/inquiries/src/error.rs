use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Public messages of the contact route.
pub mod messages {
    pub const SAVED: &str = "Pesan berhasil disimpan!";
    pub const INCOMPLETE: &str = "Data tidak lengkap!";
    pub const SERVER_ERROR: &str = "Terjadi kesalahan server.";
}

#[derive(Debug, Error)]
pub enum InquiryError {
    /// name, email or message missing from the submission.
    #[error("Missing required field: {0}")]
    Incomplete(&'static str),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type InquiryResult<T> = Result<T, InquiryError>;

impl From<InquiryError> for AppError {
    fn from(err: InquiryError) -> Self {
        match err {
            InquiryError::Incomplete(_) | InquiryError::Validation(_) => {
                AppError::BadRequest(messages::INCOMPLETE.to_string())
            }
            InquiryError::Database(detail) => AppError::internal(messages::SERVER_ERROR, detail),
        }
    }
}

impl IntoResponse for InquiryError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Contact submission failed");
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for InquiryError {
    fn from(err: mongodb::error::Error) -> Self {
        InquiryError::Database(err.to_string())
    }
}

impl From<validator::ValidationErrors> for InquiryError {
    fn from(err: validator::ValidationErrors) -> Self {
        InquiryError::Validation(err.to_string())
    }
}

use super::{AppError, messages};

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound(messages::NOT_FOUND.to_string())
}

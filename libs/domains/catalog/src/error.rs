use axum_helpers::AppError;
use thiserror::Error;

/// Public messages of the product routes.
pub mod messages {
    pub const FETCH_FAILED: &str = "Gagal mengambil data.";
    pub const SEEDED: &str = "Database berhasil diisi!";
    pub const SEED_FAILED: &str = "Gagal seeding.";
}

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Seed body is not a `{key: {id: [..], en: [..]}}` mapping.
    #[error("Malformed catalog payload: {0}")]
    MalformedPayload(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    /// Both product routes answer 500 with their own public message.
    pub fn into_app_error(self, message: &str) -> AppError {
        AppError::internal(message, self)
    }
}

impl From<mongodb::error::Error> for CatalogError {
    fn from(err: mongodb::error::Error) -> Self {
        CatalogError::Database(err.to_string())
    }
}

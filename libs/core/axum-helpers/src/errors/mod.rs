pub mod handlers;
pub mod messages;
pub mod responses;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt::Display;
use thiserror::Error;

use crate::envelope::ApiMessage;

/// Application error type that can be converted to HTTP responses.
///
/// Every variant renders as an [`ApiMessage`] with `success: false`. Only the
/// public message reaches the client; `detail` is written to the log.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Request rejected ({status}): {detail}")]
    Rejected { status: StatusCode, detail: String },

    #[error("Internal Server Error: {detail}")]
    Internal { message: String, detail: String },
}

impl AppError {
    /// 500 with a route-specific public message and a logged cause.
    pub fn internal(message: impl Into<String>, detail: impl Display) -> Self {
        AppError::Internal {
            message: message.into(),
            detail: detail.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Rejected { status, .. } => *status,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                msg
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                msg
            }
            AppError::Rejected { status, detail } => {
                tracing::warn!(status = %status, detail = %detail, "Request body rejected");
                if status == StatusCode::PAYLOAD_TOO_LARGE {
                    messages::PAYLOAD_TOO_LARGE.to_string()
                } else {
                    messages::INVALID_BODY.to_string()
                }
            }
            AppError::Internal { message, detail } => {
                tracing::error!(detail = %detail, "{}", message);
                message
            }
        };

        (status, ApiMessage::failure(message)).into_response()
    }
}

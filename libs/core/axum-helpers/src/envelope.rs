//! The JSON envelope returned by every endpoint.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{ "success": bool, "message": string }`
///
/// Failures never carry internal error detail; that stays in the server log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiMessage {
    /// Whether the request achieved its effect
    pub success: bool,
    /// Human-readable outcome
    pub message: String,
}

impl ApiMessage {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiMessage {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_serializes_flat() {
        let value = serde_json::to_value(ApiMessage::ok("Pesan berhasil disimpan!")).unwrap();
        assert_eq!(
            value,
            json!({ "success": true, "message": "Pesan berhasil disimpan!" })
        );
    }

    #[test]
    fn test_failure_sets_success_false() {
        let msg = ApiMessage::failure("nope");
        assert!(!msg.success);
        assert_eq!(msg.message, "nope");
    }
}

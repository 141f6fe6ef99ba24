//! JSON extractor whose rejections render as the API envelope.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// Drop-in replacement for `axum::Json` on request bodies.
///
/// Missing `Content-Type`, malformed JSON, type mismatches and bodies over the
/// router's limit keep axum's status code but answer with
/// `{ "success": false, "message": ... }` instead of a plain-text body.
///
/// # Example
/// ```ignore
/// use axum_helpers::JsonBody;
///
/// async fn create(JsonBody(payload): JsonBody<ContactRequest>) -> impl IntoResponse {
///     // ...
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::ApiMessage;
    use axum::{Router, body::Body, http::StatusCode, routing::post};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Payload {
        name: String,
    }

    fn app() -> Router {
        Router::new().route(
            "/",
            post(|JsonBody(p): JsonBody<Payload>| async move { ApiMessage::ok(p.name) }),
        )
    }

    async fn send(body: &'static str, content_type: Option<&str>) -> (StatusCode, ApiMessage) {
        let mut request = axum::http::Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            request = request.header("content-type", ct);
        }
        let response = app()
            .oneshot(request.body(Body::from(body)).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_accepts_valid_json() {
        let (status, body) = send(r#"{"name":"Budi"}"#, Some("application/json")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, ApiMessage::ok("Budi"));
    }

    #[tokio::test]
    async fn test_malformed_json_uses_envelope() {
        let (status, body) = send("{not json", Some("application/json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.success);
    }

    #[tokio::test]
    async fn test_missing_content_type_uses_envelope() {
        let (status, body) = send(r#"{"name":"Budi"}"#, None).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(!body.success);
    }
}

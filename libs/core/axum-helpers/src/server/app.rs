use super::shutdown::shutdown_signal;
use crate::errors::handlers::not_found;
use crate::http::cors::create_public_cors_layer;
use axum::{Router, extract::DefaultBodyLimit};
use core_config::server::ServerConfig;
use std::io;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Largest accepted request body (10 MiB).
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server berjalan di http://{}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Creates the application router with the cross-cutting concerns applied.
///
/// This function sets up:
/// - `routes` at the top level (e.g. `/`, `/health`)
/// - `apis` nested under `/api`
/// - Swagger UI at `/swagger-ui`, OpenAPI document at `/api-docs/openapi.json`
/// - Envelope 404 fallback
/// - 10 MiB body limit, open CORS, request tracing
///
/// State must already be applied to both routers.
///
/// # Type Parameters
/// * `T` - A type implementing `utoipa::OpenApi` for API documentation
pub fn create_router<T>(routes: Router, apis: Router) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(routes)
        .nest("/api", apis)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(create_public_cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{envelope::ApiMessage, errors::messages, extractors::JsonBody};
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
        routing::{get, post},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(paths())]
    struct EmptyDoc;

    fn app() -> Router {
        let routes = Router::new().route("/", get(|| async { "ready" }));
        let apis = Router::new().route(
            "/echo",
            post(|JsonBody(v): JsonBody<serde_json::Value>| async move {
                ApiMessage::ok(v.to_string().len().to_string())
            }),
        );
        create_router::<EmptyDoc>(routes, apis)
    }

    #[tokio::test]
    async fn test_unknown_route_returns_envelope_404() {
        let response = app()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ApiMessage = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, ApiMessage::failure(messages::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, "https://pasokari.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_cors_preflight_lists_get_and_post() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/echo")
                    .header(header::ORIGIN, "https://pasokari.example")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let methods = response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_METHODS)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(methods.contains("GET"));
        assert!(methods.contains("POST"));
        assert!(!methods.contains("DELETE"));
    }

    #[tokio::test]
    async fn test_body_over_limit_is_rejected() {
        let oversized = format!("\"{}\"", "a".repeat(MAX_BODY_BYTES + 1));
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/echo")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(oversized))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_body_under_limit_is_accepted() {
        let payload = format!("\"{}\"", "a".repeat(1024 * 1024));
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/echo")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

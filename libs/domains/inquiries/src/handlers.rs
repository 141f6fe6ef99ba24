use axum::{Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use axum_helpers::{
    ApiMessage, JsonBody,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{InquiryResult, messages};
use crate::models::ContactRequest;
use crate::repository::InquiryRepository;
use crate::service::InquiryService;

/// OpenAPI documentation for the contact API
#[derive(OpenApi)]
#[openapi(
    paths(submit_contact),
    components(
        schemas(ContactRequest, ApiMessage),
        responses(BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Contact", description = "Contact form submissions")
    )
)]
pub struct ApiDoc;

/// Create the contact router
pub fn router<R: InquiryRepository + 'static>(service: InquiryService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/contact", post(submit_contact))
        .with_state(shared_service)
}

/// Submit the contact form
///
/// Stores the inquiry and notifies the owner by email in the background.
/// A failed email never changes the response.
#[utoipa::path(
    post,
    path = "/contact",
    tag = "Contact",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Inquiry stored", body = ApiMessage,
            example = json!({"success": true, "message": "Pesan berhasil disimpan!"})),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn submit_contact<R: InquiryRepository>(
    State(service): State<Arc<InquiryService<R>>>,
    JsonBody(request): JsonBody<ContactRequest>,
) -> InquiryResult<impl IntoResponse> {
    service.submit(request).await?;
    Ok((StatusCode::CREATED, ApiMessage::ok(messages::SAVED)))
}

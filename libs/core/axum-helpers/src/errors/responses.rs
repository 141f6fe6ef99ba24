//! Reusable OpenAPI response types for consistent API documentation.

use crate::envelope::ApiMessage;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Missing or invalid request data",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "Data tidak lengkap!"
    })
)]
pub struct BadRequestResponse(pub ApiMessage);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "Terjadi kesalahan server."
    })
)]
pub struct InternalServerErrorResponse(pub ApiMessage);

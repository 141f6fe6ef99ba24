use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    ApiMessage, AppError, JsonBody, errors::responses::InternalServerErrorResponse,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::messages;
use crate::models::{CategoryProducts, ProductCatalog};
use crate::repository::CategoryRepository;
use crate::service::CatalogService;

/// OpenAPI documentation for the products API
#[derive(OpenApi)]
#[openapi(
    paths(list_products, seed_products),
    components(
        schemas(CategoryProducts, ApiMessage),
        responses(InternalServerErrorResponse)
    ),
    tags(
        (name = "Products", description = "Product catalog by category")
    )
)]
pub struct ApiDoc;

/// Create the products router
pub fn router<R: CategoryRepository + 'static>(service: CatalogService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/products", get(list_products))
        .route("/products/seed", post(seed_products))
        .with_state(shared_service)
}

/// List products grouped by category
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "Category key to localized product names",
            body = BTreeMap<String, CategoryProducts>,
            example = json!({"fruits": {"id": ["apel"], "en": ["apple"]}})),
        (status = 500, description = "Store unavailable", body = ApiMessage,
            example = json!({"success": false, "message": "Gagal mengambil data."}))
    )
)]
async fn list_products<R: CategoryRepository>(
    State(service): State<Arc<CatalogService<R>>>,
) -> Result<Json<ProductCatalog>, AppError> {
    let catalog = service
        .list_products()
        .await
        .map_err(|e| e.into_app_error(messages::FETCH_FAILED))?;
    Ok(Json(catalog))
}

/// Replace the whole catalog
///
/// Deletes every category, then inserts the posted ones. Unauthenticated.
#[utoipa::path(
    post,
    path = "/products/seed",
    tag = "Products",
    request_body(content = BTreeMap<String, CategoryProducts>,
        example = json!({"fruits": {"id": ["apel"], "en": ["apple"]}})),
    responses(
        (status = 200, description = "Catalog replaced", body = ApiMessage,
            example = json!({"success": true, "message": "Database berhasil diisi!"})),
        (status = 500, description = "Malformed payload or store failure", body = ApiMessage,
            example = json!({"success": false, "message": "Gagal seeding."}))
    )
)]
async fn seed_products<R: CategoryRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    JsonBody(payload): JsonBody<serde_json::Value>,
) -> Result<impl IntoResponse, AppError> {
    service
        .seed_products(payload)
        .await
        .map_err(|e| e.into_app_error(messages::SEED_FAILED))?;
    Ok(ApiMessage::ok(messages::SEEDED))
}

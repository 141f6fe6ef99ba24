//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pasokari API",
        version = "0.1.0",
        description = "Contact form and product catalog backend for the Pasokari website"
    ),
    servers(
        (url = "http://localhost:5001", description = "Local development server")
    ),
    nest(
        (path = "/api", api = domain_inquiries::ApiDoc),
        (path = "/api", api = domain_catalog::ApiDoc)
    ),
    tags(
        (name = "Contact", description = "Contact form submissions"),
        (name = "Products", description = "Product catalog by category")
    )
)]
pub struct ApiDoc;

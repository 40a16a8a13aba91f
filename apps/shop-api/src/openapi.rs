//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shop API",
        version = "1.1.0",
        description = "MongoDB-backed REST API for products and items"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc),
        (path = "/api/items", api = domain_items::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Product catalogue endpoints"),
        (name = "Items", description = "Item endpoints; writes require x-api-key when configured")
    )
)]
pub struct ApiDoc;

//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Catalog API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "MongoDB-backed REST API for managing catalog items, publishing a domain event per mutation"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/items", api = domain_catalog::ApiDoc)
    ),
    tags(
        (name = "Items", description = "Catalog item endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

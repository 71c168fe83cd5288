//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://{host}:{port}/docs`
//! - OpenAPI JSON: `http://{host}:{port}/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::models::{OrderItem, OrderRequest, OrderResponse, OrderStatus};

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Service API",
        version = "1.0.0",
        description = "Creates orders after verifying and reserving stock through the Product Service.",
        license(name = "MIT")
    ),
    paths(
        crate::gateway::handlers::create_order,
        crate::gateway::handlers::health_check,
    ),
    components(schemas(OrderRequest, OrderItem, OrderResponse, OrderStatus, HealthResponse)),
    tags(
        (name = "Orders", description = "Order creation"),
        (name = "System", description = "Health and diagnostics")
    )
)]
pub struct ApiDoc;

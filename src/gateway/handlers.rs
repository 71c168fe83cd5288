//! Order API handlers

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{Json, extract::State, http::StatusCode};
use utoipa::ToSchema;

use super::state::AppState;
use crate::models::{OrderRequest, OrderResponse};

/// Create order endpoint
///
/// POST /api/orders
///
/// Any processing failure (insufficient stock, Product Service error,
/// anything else) maps uniformly to 400 with a `FAILED` body carrying the
/// failure message and the echoed customer id.
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order created", body = OrderResponse, content_type = "application/json"),
        (status = 400, description = "Order rejected", body = OrderResponse, content_type = "application/json")
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(request): Json<OrderRequest>,
) -> (StatusCode, Json<OrderResponse>) {
    tracing::info!(
        "Received order request - customer: {}, items: {}",
        request.customer_id,
        request.items.len()
    );

    match state.processor.process_order(&request).await {
        Ok(response) => {
            tracing::info!("Order processed successfully: {:?}", response);
            (StatusCode::OK, Json(response))
        }
        Err(e) => {
            tracing::error!("Error processing order: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(OrderResponse::failure(request.customer_id, e.to_string())),
            )
        }
    }
}

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
}

/// Health check endpoint
///
/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse, content_type = "application/json")
    ),
    tag = "System"
)]
pub async fn health_check() -> Json<HealthResponse> {
    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    Json(HealthResponse { timestamp_ms })
}

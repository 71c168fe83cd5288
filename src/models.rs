//! Order domain types and Product Service wire DTOs
//!
//! All types cross a JSON boundary (inbound order API or outbound Product
//! Service calls) and use camelCase on the wire.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================================
// Inbound: order submission
// ============================================================================

/// One line of an order: a product and the requested quantity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: i64,
}

/// Order submission, as received from the caller. Not persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer_id: String,
    pub items: Vec<OrderItem>,
}

// ============================================================================
// Outbound: order result
// ============================================================================

/// Terminal status of an order submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum OrderStatus {
    #[serde(rename = "SUCCESS")]
    Success,
    #[serde(rename = "FAILED")]
    Failed,
}

/// Result returned to the caller. Built exactly once per request via
/// [`OrderResponse::success`] or [`OrderResponse::failure`], which keep the
/// status/order_id/message combinations consistent: a `SUCCESS` response
/// always carries an order id, a `FAILED` response never does.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    /// Generated order id, `null` on failure.
    pub order_id: Option<String>,
    /// Customer id echoed from the request.
    pub customer_id: String,
    pub status: OrderStatus,
    pub message: String,
}

impl OrderResponse {
    pub fn success(order_id: String, customer_id: String, message: impl Into<String>) -> Self {
        Self {
            order_id: Some(order_id),
            customer_id,
            status: OrderStatus::Success,
            message: message.into(),
        }
    }

    pub fn failure(customer_id: String, message: impl Into<String>) -> Self {
        Self {
            order_id: None,
            customer_id,
            status: OrderStatus::Failed,
            message: message.into(),
        }
    }
}

// ============================================================================
// Product Service wire DTOs (transient, one outbound call each)
// ============================================================================

/// Per-product availability query, batched into one check-stock call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockCheckRequest {
    pub product_id: String,
    pub quantity: i64,
}

/// Product Service verdict for one checked product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockCheckResponse {
    pub product_id: String,
    pub sufficient_stock: bool,
}

/// Per-product signed quantity delta, batched into one update-stock call.
/// Negative delta decrements stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockUpdateRequest {
    pub product_id: String,
    pub quantity_delta: i64,
}

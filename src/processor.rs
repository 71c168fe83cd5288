//! Order Processor - business logic for order creation
//!
//! Separated from the HTTP handlers so the check/update/identify sequence is
//! testable against a stub Product Service without the gateway in between.

use crate::error::OrderError;
use crate::models::{OrderRequest, OrderResponse, StockCheckRequest, StockUpdateRequest};
use crate::product_client::ProductClient;
use tracing::{info, warn};

const ORDER_ID_PREFIX: &str = "ORD-";
const SUCCESS_MESSAGE: &str = "Order created successfully";

/// Orchestrates one order: availability check, stock decrement, id issue.
///
/// Per-request state machine, nothing persists across calls:
/// `START -> CHECKING -> (CHECK_FAILED | UPDATING) -> (UPDATE_FAILED | SUCCEEDED)`.
/// The two failure states surface as `Err`; the gateway maps both to the
/// same `FAILED` wire status.
#[derive(Clone)]
pub struct OrderProcessor {
    client: ProductClient,
}

impl OrderProcessor {
    pub fn new(client: ProductClient) -> Self {
        Self { client }
    }

    pub async fn process_order(&self, request: &OrderRequest) -> Result<OrderResponse, OrderError> {
        self.check_stock_availability(request).await?;
        self.update_stock_quantities(request).await?;

        let order_id = generate_order_id();
        info!(
            "Order created - order_id: {}, customer: {}, items: {}",
            order_id,
            request.customer_id,
            request.items.len()
        );

        Ok(OrderResponse::success(
            order_id,
            request.customer_id.clone(),
            SUCCESS_MESSAGE,
        ))
    }

    async fn check_stock_availability(&self, request: &OrderRequest) -> Result<(), OrderError> {
        let checks: Vec<StockCheckRequest> = request
            .items
            .iter()
            .map(|item| StockCheckRequest {
                product_id: item.product_id.clone(),
                quantity: item.quantity,
            })
            .collect();

        let verdicts = self.client.check_stock(&checks).await?;

        // Verdicts are consumed in response order and the first shortfall
        // wins. The Product Service is assumed to answer in submission
        // order; no re-matching by product id is done.
        for verdict in &verdicts {
            if !verdict.sufficient_stock {
                warn!("Insufficient stock for product: {}", verdict.product_id);
                return Err(OrderError::InsufficientStock {
                    product_id: verdict.product_id.clone(),
                });
            }
        }

        Ok(())
    }

    async fn update_stock_quantities(&self, request: &OrderRequest) -> Result<(), OrderError> {
        let updates: Vec<StockUpdateRequest> = request
            .items
            .iter()
            .map(|item| StockUpdateRequest {
                product_id: item.product_id.clone(),
                quantity_delta: -item.quantity,
            })
            .collect();

        // No compensation: a failure here leaves stock checked but not
        // decremented, and only the response reflects it.
        self.client.update_stock(&updates).await
    }
}

/// Fixed prefix plus the first 8 hex chars of a v4 UUID, uppercased.
fn generate_order_id() -> String {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("{}{}", ORDER_ID_PREFIX, uuid[..8].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_format() {
        let id = generate_order_id();
        assert!(id.starts_with("ORD-"));
        let suffix = &id["ORD-".len()..];
        assert_eq!(suffix.len(), 8);
        assert!(
            suffix
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
            "suffix must be uppercase alphanumeric: {}",
            id
        );
    }

    #[test]
    fn test_order_ids_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            let id = generate_order_id();
            assert!(seen.insert(id.clone()), "duplicate order id: {}", id);
        }
    }
}

//! HTTP client for the Product Service
//!
//! Two batched operations against the inventory owner:
//! check-stock (availability verdicts) and update-stock (quantity deltas).
//! Both calls share one `reqwest::Client` built with the configured timeout.

use crate::config::ProductServiceConfig;
use crate::error::{OrderError, StockOperation, extract_error_message};
use crate::models::{StockCheckRequest, StockCheckResponse, StockUpdateRequest};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductClient {
    client: reqwest::Client,
    base_url: String,
}

impl ProductClient {
    pub fn new(config: &ProductServiceConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Check availability for a whole order in one call.
    ///
    /// Returns one verdict per submitted item. The Product Service is trusted
    /// to answer in submission order; see `OrderProcessor` for how verdicts
    /// are consumed.
    pub async fn check_stock(
        &self,
        requests: &[StockCheckRequest],
    ) -> Result<Vec<StockCheckResponse>, OrderError> {
        let url = format!("{}/api/products/check-stock", self.base_url);
        info!("Calling Product Service at {}", url);

        let response = self
            .client
            .post(&url)
            .json(requests)
            .send()
            .await
            .map_err(|e| unexpected(StockOperation::CheckStock, e))?;

        if !response.status().is_success() {
            return Err(external_failure(StockOperation::CheckStock, response).await);
        }

        response
            .json::<Vec<StockCheckResponse>>()
            .await
            .map_err(|e| unexpected(StockOperation::CheckStock, e))
    }

    /// Apply quantity deltas for a whole order in one call.
    ///
    /// Fire-and-confirm: a success status is all that is required, no body.
    pub async fn update_stock(&self, updates: &[StockUpdateRequest]) -> Result<(), OrderError> {
        let url = format!("{}/api/products/update-stock", self.base_url);
        info!("Calling Product Service at {}", url);

        let response = self
            .client
            .post(&url)
            .json(updates)
            .send()
            .await
            .map_err(|e| unexpected(StockOperation::UpdateStock, e))?;

        if !response.status().is_success() {
            return Err(external_failure(StockOperation::UpdateStock, response).await);
        }

        info!("Stock update response: {}", response.status());
        Ok(())
    }
}

fn unexpected(operation: StockOperation, e: reqwest::Error) -> OrderError {
    error!("Product Service call failed while {}: {}", operation, e);
    OrderError::Unexpected {
        operation,
        cause: e.to_string(),
    }
}

/// Turn a non-success response into an `ExternalCall` error, extracting the
/// message from the failure body's `error` field when it parses.
async fn external_failure(operation: StockOperation, response: reqwest::Response) -> OrderError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    error!(
        "Product Service returned {} while {}: {}",
        status, operation, body
    );
    OrderError::ExternalCall {
        operation,
        message: extract_error_message(&body),
    }
}

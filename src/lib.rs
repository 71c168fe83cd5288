//! Order Service
//!
//! A single request/response flow: accept an order submission, verify and
//! reserve inventory through the external Product Service, and answer with a
//! generated order id (or the failure that stopped it).
//!
//! # Modules
//!
//! - [`models`] - Order domain types and Product Service wire DTOs
//! - [`error`] - Error taxonomy and failure-body message extraction
//! - [`config`] - YAML configuration (`config/{env}.yaml`)
//! - [`logging`] - tracing bootstrap
//! - [`product_client`] - Batched check-stock / update-stock HTTP client
//! - [`processor`] - Order Processor orchestration
//! - [`gateway`] - HTTP surface (axum router, handlers, OpenAPI docs)

pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod processor;
pub mod product_client;

// Convenient re-exports at crate root
pub use config::{AppConfig, GatewayConfig, ProductServiceConfig};
pub use error::{OrderError, StockOperation};
pub use models::{
    OrderItem, OrderRequest, OrderResponse, OrderStatus, StockCheckRequest, StockCheckResponse,
    StockUpdateRequest,
};
pub use processor::OrderProcessor;
pub use product_client::ProductClient;

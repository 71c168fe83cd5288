//! Order Service entry point
//!
//! ```text
//! ┌──────────┐    ┌───────────┐    ┌─────────────────┐
//! │ Gateway  │───▶│ Processor │───▶│ Product Service │
//! │ (axum)   │    │ (check →  │    │ (check-stock,   │
//! │          │◀───│  update)  │◀───│  update-stock)  │
//! └──────────┘    └───────────┘    └─────────────────┘
//! ```

use std::sync::Arc;

use order_service::config::AppConfig;
use order_service::gateway::{self, state::AppState};
use order_service::logging::init_logging;
use order_service::processor::OrderProcessor;
use order_service::product_client::ProductClient;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env)?;
    let _guard = init_logging(&config);

    tracing::info!(
        "Starting order-service (env: {}, product service: {})",
        env,
        config.product_service.base_url
    );

    let client = ProductClient::new(&config.product_service)
        .map_err(|e| anyhow::anyhow!("Failed to build Product Service client: {}", e))?;
    let state = Arc::new(AppState::new(OrderProcessor::new(client)));

    gateway::run_server(&config.gateway, state).await
}

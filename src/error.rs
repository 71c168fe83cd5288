//! Order processing error taxonomy

use thiserror::Error;

/// Which outbound Product Service operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockOperation {
    CheckStock,
    UpdateStock,
}

impl std::fmt::Display for StockOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockOperation::CheckStock => write!(f, "checking stock"),
            StockOperation::UpdateStock => write!(f, "updating stock"),
        }
    }
}

/// Everything that can terminate an order before it succeeds.
///
/// The gateway maps all variants uniformly to HTTP 400 with a `FAILED`
/// response body; callers distinguish failures by message text only.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The Product Service reported too little stock for one product.
    #[error("Insufficient stock for product: {product_id}")]
    InsufficientStock { product_id: String },

    /// The check-stock or update-stock call returned a non-success status.
    /// `message` is the text extracted from the failure body and is surfaced
    /// to the caller verbatim.
    #[error("{message}")]
    ExternalCall {
        operation: StockOperation,
        message: String,
    },

    /// Anything else that broke the orchestration: connection errors,
    /// timeouts, undecodable success bodies.
    #[error("Error {operation}: {cause}")]
    Unexpected {
        operation: StockOperation,
        cause: String,
    },
}

/// Pull a human-readable message out of a failed Product Service response
/// body. Failure bodies are expected to be JSON objects with a string
/// `error` field; anything else falls back to a message embedding the raw
/// body so no diagnostic text is dropped.
pub fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => match value.get("error").and_then(|e| e.as_str()) {
            Some(msg) => msg.to_string(),
            None => unparseable(body),
        },
        Err(_) => unparseable(body),
    }
}

fn unparseable(body: &str) -> String {
    format!("Unparseable error response from product service: {}", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_field() {
        assert_eq!(
            extract_error_message(r#"{"error":"service unavailable"}"#),
            "service unavailable"
        );
    }

    #[test]
    fn test_extract_non_json_body_is_embedded() {
        let msg = extract_error_message("not json");
        assert!(msg.contains("not json"), "raw body must survive: {}", msg);
    }

    #[test]
    fn test_extract_json_without_error_field() {
        let msg = extract_error_message(r#"{"detail":"boom"}"#);
        assert!(msg.contains(r#"{"detail":"boom"}"#));
    }

    #[test]
    fn test_insufficient_stock_display() {
        let err = OrderError::InsufficientStock {
            product_id: "P42".to_string(),
        };
        assert_eq!(err.to_string(), "Insufficient stock for product: P42");
    }

    #[test]
    fn test_external_call_display_is_message_verbatim() {
        let err = OrderError::ExternalCall {
            operation: StockOperation::CheckStock,
            message: "service unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "service unavailable");
    }

    #[test]
    fn test_unexpected_display_names_operation() {
        let err = OrderError::Unexpected {
            operation: StockOperation::UpdateStock,
            cause: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Error updating stock: connection refused");
    }
}

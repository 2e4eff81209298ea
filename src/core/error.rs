//! Typed error handling for the order service
//!
//! Every dispatcher operation returns `Result<_, OrderError>`. The HTTP
//! status and body for each kind are decided here and nowhere else.
//!
//! # Example
//!
//! ```rust,ignore
//! match dispatcher.get(id).await {
//!     Ok(order) => println!("Found: {:?}", order),
//!     Err(OrderError::NotFound(id)) => println!("Order {} not found", id),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use super::order::OrderId;
use super::validation::FieldViolation;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// The error type for every order operation
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    /// One or more field rules failed; all of them are listed
    #[error("Validation Error")]
    Validation(Vec<FieldViolation>),

    /// No order with this id
    #[error("Order not found with id: {0}")]
    NotFound(OrderId),

    /// The path segment is not an order id
    #[error("Invalid order id: {0}")]
    InvalidId(String),

    /// The request body could not be read as an order payload
    #[error("Malformed request body")]
    MalformedBody(String),

    /// Anything unexpected, usually from the store
    #[error("{0}")]
    Internal(String),
}

/// Error body sent to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
    /// Individual problems, e.g. `"field: reason"` for validation failures
    pub errors: Vec<String>,
}

impl OrderError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrderError::Validation(_) => StatusCode::BAD_REQUEST,
            OrderError::NotFound(_) => StatusCode::NOT_FOUND,
            OrderError::InvalidId(_) => StatusCode::BAD_REQUEST,
            OrderError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            OrderError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            message: self.to_string(),
            errors: self.details(),
        }
    }

    fn details(&self) -> Vec<String> {
        match self {
            OrderError::Validation(violations) => {
                violations.iter().map(ToString::to_string).collect()
            }
            OrderError::MalformedBody(detail) => vec![detail.clone()],
            OrderError::NotFound(_) | OrderError::InvalidId(_) | OrderError::Internal(_) => {
                Vec::new()
            }
        }
    }
}

/// Single fallback for collaborator failures
impl From<anyhow::Error> for OrderError {
    fn from(err: anyhow::Error) -> Self {
        OrderError::Internal(format!("{err:#}"))
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            OrderError::Internal(message) => {
                tracing::error!(error = %message, "order operation failed")
            }
            other => tracing::debug!(status = %status, error = %other, "order request rejected"),
        }
        (status, Json(self.to_response())).into_response()
    }
}

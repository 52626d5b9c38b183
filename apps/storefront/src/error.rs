//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  View                        Rust Backend                               │
//! │  ────                        ────────────                               │
//! │                                                                         │
//! │  dispatch(add_to_cart)                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Admission failed? ─── CoreError::OutOfStock ──────┐            │  │
//! │  │         │              (notice raised too)         │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Bad input? ─────────── CoreError::Validation ─── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  e.code = "INSUFFICIENT_POINTS"                                         │
//! │  e.message = "Insufficient points: 5997 required, 5000 available"       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_core::{CoreError, ValidationError};

/// API error returned from commands.
///
/// ```json
/// {
///   "code": "OUT_OF_STOCK",
///   "message": "Cool Tees is out of stock: 3 available, 4 requested"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product or cart line not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Quantity would exceed stock
    OutOfStock,

    /// Points mode and the balance does not cover the cart
    InsufficientPoints,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::NotInCart(id) => ApiError::not_found("Cart line for product", id),
            err @ CoreError::OutOfStock { .. } => {
                ApiError::new(ErrorCode::OutOfStock, err.to_string())
            }
            err @ CoreError::InsufficientPoints { .. } => {
                ApiError::new(ErrorCode::InsufficientPoints, err.to_string())
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Admission / lookup failures                    │
//! │  └── ValidationError  - Catalog and form input failures                │
//! │                                                                         │
//! │  storefront-app errors (separate crate)                                │
//! │  └── ApiError         - What the view sees (serialized)                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → View                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product, quantities, points)
//! 3. Errors are enum variants, never String
//! 4. A rejected operation never leaves partial state behind

use thiserror::Error;

use crate::points::Points;
use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// `OutOfStock` and `InsufficientPoints` are the two admission failures the
/// shopper can recover from; both surface as a transient notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Product id is not part of the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Quantity would exceed the product's stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Add to Cart (in cart: 3)
    ///      │
    ///      ▼
    /// Check stock: stock=3
    ///      │
    ///      ▼
    /// OutOfStock { name: "Cool Tees", stock: 3, requested: 4 }
    ///      │
    ///      ▼
    /// UI shows: "Item out of stock!"
    /// ```
    #[error("{name} is out of stock: {stock} available, {requested} requested")]
    OutOfStock {
        product_id: ProductId,
        name: String,
        stock: u32,
        requested: u32,
    },

    /// Points mode is active and the prospective cart costs more points than
    /// the shopper holds.
    #[error("Insufficient points: {required} required, {available} available")]
    InsufficientPoints { required: Points, available: Points },

    /// Quantity update targeted a product with no cart line.
    #[error("Product {0} not in cart")]
    NotInCart(ProductId),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while loading the catalog and by form inputs (newsletter).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Duplicate value (e.g., duplicate product id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::OutOfStock {
            product_id: ProductId::new(2),
            name: "Cool Tees".to_string(),
            stock: 3,
            requested: 4,
        };
        assert_eq!(
            err.to_string(),
            "Cool Tees is out of stock: 3 available, 4 requested"
        );

        let err = CoreError::InsufficientPoints {
            required: Points::new(5997),
            available: Points::new(5000),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient points: 5997 required, 5000 available"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "email".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}

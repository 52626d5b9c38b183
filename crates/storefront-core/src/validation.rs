//! # Validation Module
//!
//! Input validation for catalog loading and storefront forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: View                                                         │
//! │  ├── `required` on the newsletter input                                │
//! │  └── Disabled buttons (canAdd, canIncrement, canSettle)                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Commands → THIS MODULE                                       │
//! │  ├── Catalog entries checked once at load                              │
//! │  └── Newsletter email checked on submit                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Ledger rules                                                 │
//! │  └── Admission checks re-run on every mutation                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_email, validate_product_name};
//!
//! assert!(validate_product_name("Trendy Caps").is_ok());
//! assert!(validate_email("shopper@example.com").is_ok());
//! assert!(validate_email("not-an-email").is_err());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted product name.
pub const MAX_NAME_LEN: usize = 200;

/// Longest accepted email address (RFC 5321 path limit).
pub const MAX_EMAIL_LEN: usize = 254;

/// Highest accepted unit price: $10,000,000.00.
pub const MAX_PRICE_CENTS: i64 = 1_000_000_000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a newsletter email address.
///
/// ## Rules
/// - Must not be empty
/// - Exactly one `@`, with a non-empty local part
/// - Domain contains a dot that is neither first nor last
/// - No whitespace
///
/// ## Returns
/// The trimmed address.
pub fn validate_email(email: &str) -> ValidationResult<String> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if email.len() > MAX_EMAIL_LEN {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: MAX_EMAIL_LEN,
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain whitespace"));
    }

    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return Err(invalid("must contain '@'")),
    };

    if local.is_empty() || domain.contains('@') {
        return Err(invalid("must have exactly one '@' after a name"));
    }

    if domain.starts_with('.') || domain.ends_with('.') || !domain.contains('.') {
        return Err(invalid("domain must look like example.com"));
    }

    Ok(email.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price. Zero is allowed (free items).
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a single catalog entry.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_price(product.price)?;
    Ok(())
}

/// Validates every entry and rejects duplicate ids.
pub fn validate_catalog(products: &[Product]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(products.len());

    for product in products {
        validate_product(product)?;

        if !seen.insert(product.id) {
            return Err(ValidationError::Duplicate {
                field: "product id".to_string(),
                value: product.id.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

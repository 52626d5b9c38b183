//! # storefront-core: Cart & Loyalty Ledger
//!
//! Pure business logic for the Codestrive storefront: catalog projection,
//! cart admission, dual pricing in currency and loyalty points, and checkout
//! settlement. Zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Codestrive Storefront Architecture                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    View (presentation layer)                    │   │
//! │  │   Carousel ──► Product Grid ──► Cart Drawer ──► Quick View      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    storefront-app                               │   │
//! │  │   add_to_cart, update_quantity, checkout, notice timer          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ storefront-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │ catalog  │ │   cart   │ │  ledger  │ │ checkout/notice  │  │   │
//! │  │   │ filter   │ │ CartLine │ │ canAdd   │ │ Settlement       │  │   │
//! │  │   │ sort     │ │ totals   │ │ Session  │ │ Notice           │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO GLOBALS                               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, Category, filters, PaymentMode
//! - [`money`] - Money type with integer arithmetic
//! - [`points`] - Loyalty point amounts
//! - [`cart`] - Cart lines and derived totals
//! - [`ledger`] - Admission rules and the shopper `Session`
//! - [`checkout`] - Settlement outcome and state machine
//! - [`catalog`] - Product list with filter & sort
//! - [`notice`] - Transient shopper notices
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog and form validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Catalog, Points, ProductId, Session};
//!
//! let catalog = Catalog::seed().unwrap();
//! let tees = catalog.get(ProductId::new(2)).unwrap();
//!
//! let mut session = Session::new(Points::new(5000));
//! session.add_to_cart(tees).unwrap();
//! session.add_to_cart(tees).unwrap();
//!
//! // Currency checkout earns floor(599.98 × 10) points
//! let outcome = session.checkout();
//! assert!(outcome.is_success());
//! assert_eq!(session.balance(), Points::new(10_999));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ledger;
pub mod money;
pub mod notice;
pub mod points;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartTotals};
pub use catalog::Catalog;
pub use checkout::{RejectReason, Settlement, SettlementState};
pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::{admission, can_add, can_increment, can_settle, QuantityChange, Session};
pub use money::Money;
pub use notice::{Notice, NoticeKind};
pub use points::Points;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Points every session starts with.
pub const INITIAL_POINTS_BALANCE: u64 = 5000;

/// Points earned per currency unit on a currency checkout.
pub const POINTS_PER_CURRENCY_UNIT: u64 = 10;

/// How long a notice stays on screen.
pub const NOTICE_DISMISS_MS: u64 = 3000;

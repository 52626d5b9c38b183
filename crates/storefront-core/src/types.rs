//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │   PaymentMode   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  Cloths         │   │  Currency       │       │
//! │  │  name           │   │  Accessories    │   │  Points         │       │
//! │  │  price (Money)  │   └─────────────────┘   └─────────────────┘       │
//! │  │  points (cost)  │                                                    │
//! │  │  stock          │   ┌─────────────────┐   ┌─────────────────┐       │
//! │  └─────────────────┘   │ CategoryFilter  │   │   SortOrder     │       │
//! │                        │  All / Only(c)  │   │  featured       │       │
//! │                        └─────────────────┘   │  price-asc/desc │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::points::Points;

// =============================================================================
// Product Id
// =============================================================================

/// Stable product identifier, unique within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductId(u32);

impl ProductId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Category
// =============================================================================

/// The closed set of product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    Cloths,
    Accessories,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Cloths, Category::Accessories];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Cloths => "Cloths",
            Category::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Category Filter
// =============================================================================

/// Grid filter: every product, or a single category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether `category` passes the filter.
    #[inline]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(c) => c.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "All" => Ok(CategoryFilter::All),
            "Cloths" => Ok(CategoryFilter::Only(Category::Cloths)),
            "Accessories" => Ok(CategoryFilter::Only(Category::Accessories)),
            _ => Err(ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: std::iter::once("All")
                    .chain(Category::ALL.iter().map(Category::as_str))
                    .map(str::to_string)
                    .collect(),
            }),
        }
    }
}

// =============================================================================
// Sort Order
// =============================================================================

/// Grid ordering. `Featured` keeps catalog order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Featured => "featured",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "featured" => Ok(SortOrder::Featured),
            "price-asc" => Ok(SortOrder::PriceAsc),
            "price-desc" => Ok(SortOrder::PriceDesc),
            _ => Err(ValidationError::NotAllowed {
                field: "sort".to_string(),
                allowed: vec![
                    "featured".to_string(),
                    "price-asc".to_string(),
                    "price-desc".to_string(),
                ],
            }),
        }
    }
}

// =============================================================================
// Payment Mode
// =============================================================================

/// Which balance settles the cart.
///
/// ## Effect on the Rules
/// ```text
/// ┌──────────────┬──────────────────────────────┬───────────────────────────┐
/// │ Mode         │ Admission                    │ Checkout                  │
/// ├──────────────┼──────────────────────────────┼───────────────────────────┤
/// │ Currency     │ stock only                   │ always succeeds, earns    │
/// │              │                              │ floor(total × 10) points  │
/// │ Points       │ stock + balance covers cart  │ spends cart points or     │
/// │              │                              │ rejects                   │
/// └──────────────┴──────────────────────────────┴───────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    #[default]
    Currency,
    Points,
}

impl PaymentMode {
    /// Maps the view's "Pay with points" checkbox.
    #[inline]
    pub const fn from_use_points(use_points: bool) -> Self {
        if use_points {
            PaymentMode::Points
        } else {
            PaymentMode::Currency
        }
    }

    #[inline]
    pub const fn uses_points(&self) -> bool {
        matches!(self, PaymentMode::Points)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available in the storefront. Immutable after catalog load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,

    /// Display name shown on cards, the carousel and in the cart.
    pub name: String,

    /// Unit price in currency.
    pub price: Money,

    /// Unit cost in loyalty points.
    pub points: Points,

    pub description: String,

    /// Image reference resolved by the view.
    pub image: String,

    pub category: Category,

    /// Units available for the session. Never decremented by a purchase.
    pub stock: u32,
}

impl Product {
    /// Checks if `quantity` units fit within stock.
    #[inline]
    pub fn can_hold(&self, quantity: u32) -> bool {
        quantity <= self.stock
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

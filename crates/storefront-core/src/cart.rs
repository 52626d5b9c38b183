//! # Cart
//!
//! The shopper's running cart: an ordered list of lines, one per product.
//!
//! This module only holds data and derived totals. The rules that decide
//! whether a line may grow live in [`crate::ledger`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::points::Points;
use crate::types::{Product, ProductId};

/// A line in the cart.
///
/// ## Design Notes
/// The product's name, prices, stock and image are frozen when the line is
/// created, so the drawer renders and enforces limits without going back to
/// the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,

    /// Name at time of adding (frozen)
    pub name: String,

    /// Unit price at time of adding (frozen)
    pub unit_price: Money,

    /// Unit point cost at time of adding (frozen)
    pub unit_points: Points,

    /// Stock ceiling for this line
    pub stock: u32,

    pub image: String,

    /// Always > 0 while the line exists
    pub quantity: u32,

    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a line from a product snapshot.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        CartLine {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            unit_points: product.points,
            stock: product.stock,
            image: product.image.clone(),
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }

    /// Unit point cost × quantity.
    pub fn line_points(&self) -> Points {
        self.unit_points * self.quantity
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_id`
/// - Every line has quantity > 0
/// - New lines are appended (display order)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    pub(crate) fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product_id == product_id)
    }

    /// Quantity held for a product, 0 if it has no line.
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.line(product_id).map_or(0, |l| l.quantity)
    }

    /// Appends a new line. Callers guarantee no line exists for the product.
    pub(crate) fn push(&mut self, line: CartLine) {
        debug_assert!(self.line(line.product_id).is_none());
        self.lines.push(line);
    }

    /// Removes the line for a product. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        self.lines.len() != initial_len
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across lines (the cart badge).
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Σ(unit price × quantity).
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Σ(unit point cost × quantity).
    pub fn points(&self) -> Points {
        self.lines.iter().map(CartLine::line_points).sum()
    }
}

/// Cart totals summary for the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: u32,
    pub total: Money,
    pub points: Points,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            total: cart.total(),
            points: cart.points(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn test_product(id: u32, cents: i64, points: u64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            price: Money::from_cents(cents),
            points: Points::new(points),
            description: String::new(),
            image: format!("{}.jpg", id),
            category: Category::Cloths,
            stock: 5,
        }
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.push(CartLine::from_product(&test_product(1, 19_999, 1999), 2));
        cart.push(CartLine::from_product(&test_product(2, 29_999, 2999), 1));

        assert_eq!(cart.total().cents(), 69_997);
        assert_eq!(cart.points().value(), 6997);
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.line_count(), 2);

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.total, Money::from_cents(69_997));
        assert_eq!(totals.points, Points::new(6997));
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
        assert!(cart.points().is_zero());
        assert_eq!(cart.quantity_of(ProductId::new(1)), 0);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::new();
        cart.push(CartLine::from_product(&test_product(1, 100, 10), 1));
        cart.push(CartLine::from_product(&test_product(2, 200, 20), 1));

        assert!(cart.remove(ProductId::new(1)));
        assert!(!cart.remove(ProductId::new(1)));
        assert_eq!(cart.lines()[0].product_id, ProductId::new(2));

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_line_snapshots_product() {
        let product = test_product(7, 15_999, 1599);
        let line = CartLine::from_product(&product, 3);
        assert_eq!(line.name, "Product 7");
        assert_eq!(line.stock, 5);
        assert_eq!(line.line_total().cents(), 47_997);
        assert_eq!(line.line_points().value(), 4797);
    }
}

//! # Catalog
//!
//! The product list, loaded once at startup and never mutated.
//!
//! ## Grid Projection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog (load order)                                                   │
//! │    Trendy Caps  $199.99  Cloths                                         │
//! │    Cool Tees    $299.99  Cloths                                         │
//! │    Weekend Bag  $159.99  Accessories                                    │
//! │         │                                                               │
//! │         ▼  filter: category == Cloths (or All)                          │
//! │    Trendy Caps, Cool Tees                                               │
//! │         │                                                               │
//! │         ▼  stable sort: featured | price-asc | price-desc               │
//! │    Vec<&Product> handed to the grid                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::cmp::Reverse;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::points::Points;
use crate::types::{Category, CategoryFilter, Product, ProductId, SortOrder};
use crate::validation::validate_catalog;

/// An immutable, validated set of products.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting invalid entries and duplicate ids.
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        validate_catalog(&products)?;
        Ok(Catalog { products })
    }

    /// The storefront's mock catalog, validated like any other load.
    pub fn seed() -> CoreResult<Self> {
        Catalog::new(vec![
            Product {
                id: ProductId::new(1),
                name: "Trendy Caps".to_string(),
                price: Money::from_cents(19_999),
                points: Points::new(1999),
                description: "Trendy cap with a sleek design, offering both style and sun protection for any occasion.".to_string(),
                image: "cap.jpg".to_string(),
                category: Category::Cloths,
                stock: 5,
            },
            Product {
                id: ProductId::new(2),
                name: "Cool Tees".to_string(),
                price: Money::from_cents(29_999),
                points: Points::new(2999),
                description: "Comfortable, stylish t-shirt with a modern design, perfect for everyday wear.".to_string(),
                image: "shirt.jpg".to_string(),
                category: Category::Cloths,
                stock: 3,
            },
            Product {
                id: ProductId::new(3),
                name: "Leather Weekend Bag".to_string(),
                price: Money::from_cents(15_999),
                points: Points::new(1599),
                description: "Handcrafted genuine leather travel bag.".to_string(),
                image: "bag.jpg".to_string(),
                category: Category::Accessories,
                stock: 8,
            },
        ])
    }

    /// All products in load order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product by id.
    pub fn get(&self, id: ProductId) -> CoreResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(CoreError::ProductNotFound(id))
    }

    /// Filters then stable-sorts the catalog for the product grid.
    ///
    /// ```rust
    /// use storefront_core::{Catalog, Category, CategoryFilter, SortOrder};
    ///
    /// let catalog = Catalog::seed().unwrap();
    /// let cloths = catalog.list(CategoryFilter::Only(Category::Cloths), SortOrder::PriceDesc);
    /// let names: Vec<_> = cloths.iter().map(|p| p.name.as_str()).collect();
    /// assert_eq!(names, ["Cool Tees", "Trendy Caps"]);
    /// ```
    pub fn list(&self, filter: CategoryFilter, sort: SortOrder) -> Vec<&Product> {
        let mut listed: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| filter.matches(p.category))
            .collect();

        // sort_by_key is stable: equal prices keep catalog order
        match sort {
            SortOrder::Featured => {}
            SortOrder::PriceAsc => listed.sort_by_key(|p| p.price),
            SortOrder::PriceDesc => listed.sort_by_key(|p| Reverse(p.price)),
        }

        listed
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn product(id: u32, cents: i64, category: Category) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {}", id),
            price: Money::from_cents(cents),
            points: Points::new(cents as u64 / 10),
            description: String::new(),
            image: String::new(),
            category,
            stock: 1,
        }
    }

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_seed_is_valid() {
        let seed = Catalog::seed().unwrap();
        assert_eq!(seed.len(), 3);
        assert!(Catalog::new(seed.products().to_vec()).is_ok());
    }

    #[test]
    fn test_new_rejects_out_of_range_price() {
        let seed = Catalog::seed().unwrap();
        let mut products = seed.products().to_vec();
        products[0].price = Money::from_cents(i64::MAX / 2 + 1);

        assert!(matches!(
            Catalog::new(products),
            Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_filter_by_category_keeps_order() {
        let catalog = Catalog::new(vec![
            product(1, 19_999, Category::Cloths),
            product(2, 29_999, Category::Cloths),
            product(3, 15_999, Category::Accessories),
        ])
        .unwrap();

        let cloths = catalog.list(CategoryFilter::Only(Category::Cloths), SortOrder::Featured);
        assert_eq!(ids(&cloths), vec![1, 2]);

        let all = catalog.list(CategoryFilter::All, SortOrder::Featured);
        assert_eq!(ids(&all), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_by_price() {
        let catalog = Catalog::new(vec![
            product(1, 29_999, Category::Cloths),
            product(2, 19_999, Category::Cloths),
        ])
        .unwrap();

        let asc = catalog.list(CategoryFilter::All, SortOrder::PriceAsc);
        assert_eq!(ids(&asc), vec![2, 1]);

        let desc = catalog.list(CategoryFilter::All, SortOrder::PriceDesc);
        assert_eq!(ids(&desc), vec![1, 2]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_prices() {
        let catalog = Catalog::new(vec![
            product(1, 500, Category::Cloths),
            product(2, 100, Category::Cloths),
            product(3, 500, Category::Cloths),
        ])
        .unwrap();

        assert_eq!(ids(&catalog.list(CategoryFilter::All, SortOrder::PriceAsc)), vec![2, 1, 3]);
        assert_eq!(ids(&catalog.list(CategoryFilter::All, SortOrder::PriceDesc)), vec![1, 3, 2]);
    }

    #[test]
    fn test_list_does_not_mutate_catalog() {
        let catalog = Catalog::seed().unwrap();
        let _ = catalog.list(CategoryFilter::All, SortOrder::PriceAsc);
        assert_eq!(ids(&catalog.list(CategoryFilter::All, SortOrder::Featured)), vec![1, 2, 3]);
    }

    #[test]
    fn test_get() {
        let catalog = Catalog::seed().unwrap();
        assert_eq!(catalog.get(ProductId::new(2)).unwrap().name, "Cool Tees");
        assert_eq!(
            catalog.get(ProductId::new(42)).unwrap_err(),
            CoreError::ProductNotFound(ProductId::new(42))
        );
    }
}

//! # Catalog Commands
//!
//! Product grid, quick-view modal and carousel.
//!
//! ## Grid Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shopper picks "Cloths" + "Price: Low to High"                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  set_filter("Cloths"), set_sort("price-asc")  ──► UiState               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  product_grid() ──► Catalog::list(filter, sort)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<ProductCard> with canAdd + button label per product                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CatalogState, SessionState, UiState};
use storefront_core::notice::add_button_label;
use storefront_core::{CategoryFilter, Product, ProductId, Session, SortOrder};

/// A product as the grid, carousel and quick view render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    #[serde(flatten)]
    pub product: Product,
    /// Whether the Add button is enabled
    pub can_add: bool,
    /// "Add to Cart", "Out of Stock" or "Insufficient Points"
    pub add_label: &'static str,
}

impl ProductCard {
    pub fn new(product: &Product, session: &Session) -> Self {
        let admission = session.admission(product);
        ProductCard {
            product: product.clone(),
            can_add: admission.is_ok(),
            add_label: add_button_label(&admission),
        }
    }
}

/// Lists products for an explicit filter and sort.
pub fn list_products(
    catalog: &CatalogState,
    session: &SessionState,
    filter: CategoryFilter,
    sort: SortOrder,
) -> Vec<ProductCard> {
    debug!(%filter, sort = sort.as_str(), "list_products command");

    session.with_session(|s| {
        catalog
            .inner()
            .list(filter, sort)
            .into_iter()
            .map(|p| ProductCard::new(p, s))
            .collect()
    })
}

/// Lists products using the grid's current filter and sort.
pub fn product_grid(catalog: &CatalogState, session: &SessionState, ui: &UiState) -> Vec<ProductCard> {
    let (filter, sort) = ui.with_ui(|u| (u.filter, u.sort));
    list_products(catalog, session, filter, sort)
}

/// Sets the category filter from its display name ("All", "Cloths", ...).
pub fn set_filter(ui: &UiState, category: &str) -> Result<CategoryFilter, ApiError> {
    debug!(category, "set_filter command");
    let filter = category.parse::<CategoryFilter>()?;
    ui.with_ui_mut(|u| u.filter = filter);
    Ok(filter)
}

/// Sets the grid order from its option value ("featured", "price-asc", ...).
pub fn set_sort(ui: &UiState, sort: &str) -> Result<SortOrder, ApiError> {
    debug!(sort, "set_sort command");
    let order = sort.parse::<SortOrder>()?;
    ui.with_ui_mut(|u| u.sort = order);
    Ok(order)
}

/// Opens the quick-view modal for a product.
pub fn open_quick_view(
    catalog: &CatalogState,
    session: &SessionState,
    ui: &UiState,
    product_id: ProductId,
) -> Result<ProductCard, ApiError> {
    debug!(%product_id, "open_quick_view command");
    let product = catalog.inner().get(product_id)?;
    ui.with_ui_mut(|u| u.quick_view = Some(product_id));
    Ok(session.with_session(|s| ProductCard::new(product, s)))
}

pub fn close_quick_view(ui: &UiState) {
    debug!("close_quick_view command");
    ui.with_ui_mut(|u| u.quick_view = None);
}

/// The carousel's current slide, `None` for an empty catalog.
pub fn carousel_slide(catalog: &CatalogState, session: &SessionState, ui: &UiState) -> Option<ProductCard> {
    let index = ui.with_ui(|u| u.carousel_index);
    let product = catalog.inner().products().get(index)?;
    Some(session.with_session(|s| ProductCard::new(product, s)))
}

pub fn carousel_next(catalog: &CatalogState, session: &SessionState, ui: &UiState) -> Option<ProductCard> {
    ui.with_ui_mut(|u| u.carousel_next(catalog.inner().len()));
    carousel_slide(catalog, session, ui)
}

pub fn carousel_previous(catalog: &CatalogState, session: &SessionState, ui: &UiState) -> Option<ProductCard> {
    ui.with_ui_mut(|u| u.carousel_previous(catalog.inner().len()));
    carousel_slide(catalog, session, ui)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::PaymentMode;

    fn names(cards: &[ProductCard]) -> Vec<&str> {
        cards.iter().map(|c| c.product.name.as_str()).collect()
    }

    #[test]
    fn test_product_grid_follows_ui() {
        let catalog = CatalogState::default();
        let session = SessionState::default();
        let ui = UiState::new();

        assert_eq!(product_grid(&catalog, &session, &ui).len(), 3);

        set_filter(&ui, "Cloths").unwrap();
        set_sort(&ui, "price-desc").unwrap();
        assert_eq!(
            names(&product_grid(&catalog, &session, &ui)),
            vec!["Cool Tees", "Trendy Caps"]
        );

        assert!(set_filter(&ui, "Shoes").is_err());
        assert!(set_sort(&ui, "newest").is_err());
    }

    #[test]
    fn test_cards_reflect_admission() {
        let catalog = CatalogState::default();
        let session = SessionState::new(2000, 10);
        session.with_session_mut(|s| s.set_payment_mode(PaymentMode::Points));

        let cards = list_products(&catalog, &session, CategoryFilter::All, SortOrder::Featured);
        let tees = cards.iter().find(|c| c.product.name == "Cool Tees").unwrap();
        assert!(!tees.can_add);
        assert_eq!(tees.add_label, "Insufficient Points");

        let caps = cards.iter().find(|c| c.product.name == "Trendy Caps").unwrap();
        assert!(caps.can_add);
        assert_eq!(caps.add_label, "Add to Cart");
    }

    #[test]
    fn test_quick_view() {
        let catalog = CatalogState::default();
        let session = SessionState::default();
        let ui = UiState::new();

        let card = open_quick_view(&catalog, &session, &ui, ProductId::new(3)).unwrap();
        assert_eq!(card.product.name, "Leather Weekend Bag");
        assert_eq!(ui.with_ui(|u| u.quick_view), Some(ProductId::new(3)));

        assert!(open_quick_view(&catalog, &session, &ui, ProductId::new(99)).is_err());

        close_quick_view(&ui);
        assert_eq!(ui.with_ui(|u| u.quick_view), None);
    }

    #[test]
    fn test_carousel_navigation() {
        let catalog = CatalogState::default();
        let session = SessionState::default();
        let ui = UiState::new();

        assert_eq!(carousel_slide(&catalog, &session, &ui).unwrap().product.id, ProductId::new(1));
        assert_eq!(carousel_previous(&catalog, &session, &ui).unwrap().product.id, ProductId::new(3));
        assert_eq!(carousel_next(&catalog, &session, &ui).unwrap().product.id, ProductId::new(1));
    }
}

//! # Cart Commands
//!
//! Commands behind the Add buttons and the cart drawer.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│  Drawer  │────►│ Settled  │       │
//! │  │  Cart    │     │          │     │  open    │     │          │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart        checkout                          │
//! │                   update_quantity    (checkout.rs)                     │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │           rejected admission ──► notice (auto-dismissed)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::{CatalogState, NoticeState, SessionState, UiState};
use storefront_core::{
    can_increment, can_settle, CartLine, CartTotals, CoreError, NoticeKind, PaymentMode, Points,
    ProductId, Session,
};

/// A drawer line with its `+` button state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    #[serde(flatten)]
    pub line: CartLine,
    pub can_increment: bool,
}

/// Cart drawer contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLineView>,
    pub totals: CartTotals,
    pub balance: Points,
    pub payment_mode: PaymentMode,
    /// Whether the checkout button is enabled
    pub can_checkout: bool,
    /// "Pay with Points" or "Checkout"
    pub checkout_label: &'static str,
}

impl From<&Session> for CartResponse {
    fn from(session: &Session) -> Self {
        let cart = session.cart();
        let balance = session.balance();
        let mode = session.payment_mode();

        CartResponse {
            lines: cart
                .lines()
                .iter()
                .map(|line| CartLineView {
                    line: line.clone(),
                    can_increment: can_increment(line, cart, balance, mode),
                })
                .collect(),
            totals: CartTotals::from(cart),
            balance,
            payment_mode: mode,
            can_checkout: can_settle(cart, balance, mode),
            checkout_label: if mode.uses_points() {
                "Pay with Points"
            } else {
                "Checkout"
            },
        }
    }
}

/// Raises a notice for admission failures and passes the error on.
fn report(notices: &NoticeState, err: CoreError) -> ApiError {
    if let Some(kind) = NoticeKind::for_error(&err) {
        warn!(error = %err, "Admission rejected");
        notices.raise(kind);
    }
    ApiError::from(err)
}

/// Gets the current cart contents.
pub fn get_cart(session: &SessionState) -> CartResponse {
    debug!("get_cart command");
    session.with_session(|s| CartResponse::from(s))
}

/// Adds one unit of a product.
///
/// ## Behavior
/// - Admission fails: notice raised, `Err`, nothing changes
/// - Product already in cart: quantity + 1
/// - Otherwise: new line appended
pub fn add_to_cart(
    catalog: &CatalogState,
    session: &SessionState,
    notices: &NoticeState,
    product_id: ProductId,
) -> Result<CartResponse, ApiError> {
    debug!(%product_id, "add_to_cart command");

    let product = catalog.inner().get(product_id)?;

    let outcome: Result<CartResponse, CoreError> = session.with_session_mut(|s| {
        let quantity = s.add_to_cart(product)?;
        debug!(%product_id, quantity, "Added to cart");
        Ok(CartResponse::from(&*s))
    });
    outcome.map_err(|e| report(notices, e))
}

/// Adds from the quick-view modal, then closes it whatever the outcome.
pub fn add_from_quick_view(
    catalog: &CatalogState,
    session: &SessionState,
    notices: &NoticeState,
    ui: &UiState,
) -> Result<CartResponse, ApiError> {
    let product_id = ui
        .with_ui_mut(|u| u.quick_view.take())
        .ok_or_else(|| ApiError::validation("No product is open in quick view"))?;
    add_to_cart(catalog, session, notices, product_id)
}

/// Applies a signed delta to a line (the drawer's `+`/`-` buttons).
///
/// ## Behavior
/// - Reaching 0 or below removes the line
/// - Above stock or unaffordable in points mode: notice raised, `Err`
pub fn update_quantity(
    session: &SessionState,
    notices: &NoticeState,
    product_id: ProductId,
    delta: i64,
) -> Result<CartResponse, ApiError> {
    debug!(%product_id, delta, "update_quantity command");

    let outcome: Result<CartResponse, CoreError> = session.with_session_mut(|s| {
        let change = s.update_quantity(product_id, delta)?;
        debug!(%product_id, ?change, "Quantity updated");
        Ok(CartResponse::from(&*s))
    });
    outcome.map_err(|e| report(notices, e))
}

/// Removes a line. Always succeeds; removing a missing line is a no-op.
pub fn remove_from_cart(session: &SessionState, product_id: ProductId) -> CartResponse {
    debug!(%product_id, "remove_from_cart command");

    session.with_session_mut(|s| {
        if !s.remove_from_cart(product_id) {
            debug!(%product_id, "Nothing to remove");
        }
        CartResponse::from(&*s)
    })
}

/// The "Pay with points" checkbox.
pub fn set_payment_mode(session: &SessionState, use_points: bool) -> CartResponse {
    debug!(use_points, "set_payment_mode command");

    session.with_session_mut(|s| {
        s.set_payment_mode(PaymentMode::from_use_points(use_points));
        CartResponse::from(&*s)
    })
}

/// Opens or closes the cart drawer. Returns the new state.
pub fn toggle_cart(ui: &UiState) -> bool {
    let open = ui.with_ui_mut(|u| {
        u.cart_open = !u.cart_open;
        u.cart_open
    });
    debug!(open, "toggle_cart command");
    open
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::time::Duration;

    const CAPS: ProductId = ProductId::new(1);
    const TEES: ProductId = ProductId::new(2);

    fn states() -> (CatalogState, SessionState, NoticeState) {
        (
            CatalogState::default(),
            SessionState::new(5000, 10),
            NoticeState::new(Duration::from_secs(3)),
        )
    }

    #[test]
    fn test_points_mode_third_add_rejected() {
        let (catalog, session, notices) = states();
        set_payment_mode(&session, true);

        add_to_cart(&catalog, &session, &notices, CAPS).unwrap();
        add_to_cart(&catalog, &session, &notices, CAPS).unwrap();
        assert!(notices.current().is_none());

        let err = add_to_cart(&catalog, &session, &notices, CAPS).unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientPoints);

        let cart = get_cart(&session);
        assert_eq!(cart.lines[0].line.quantity, 2);
        assert_eq!(cart.totals.points, Points::new(3998));
        assert!(!cart.lines[0].can_increment);
        assert_eq!(cart.checkout_label, "Pay with Points");

        let notice = notices.current().unwrap();
        assert_eq!(notice.message, "Insufficient points!");
    }

    #[test]
    fn test_out_of_stock_raises_notice() {
        let (catalog, session, notices) = states();
        for _ in 0..3 {
            add_to_cart(&catalog, &session, &notices, TEES).unwrap();
        }

        let err = add_to_cart(&catalog, &session, &notices, TEES).unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfStock);
        assert_eq!(notices.current().unwrap().kind, NoticeKind::OutOfStock);
        assert_eq!(get_cart(&session).totals.total_quantity, 3);
    }

    #[test]
    fn test_sold_out_in_points_mode_reports_stock() {
        let catalog = CatalogState::default();
        let session = SessionState::new(20_000, 10);
        let notices = NoticeState::new(Duration::from_secs(3));
        set_payment_mode(&session, true);

        for _ in 0..3 {
            add_to_cart(&catalog, &session, &notices, TEES).unwrap();
        }

        let err = add_to_cart(&catalog, &session, &notices, TEES).unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfStock);
        assert_eq!(notices.current().unwrap().message, "Item out of stock!");

        let card = session.with_session(|s| {
            crate::commands::catalog::ProductCard::new(catalog.inner().get(TEES).unwrap(), s)
        });
        assert_eq!(card.add_label, "Out of Stock");
    }

    #[test]
    fn test_unknown_product() {
        let (catalog, session, notices) = states();
        let err = add_to_cart(&catalog, &session, &notices, ProductId::new(99)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(notices.current().is_none());
    }

    #[test]
    fn test_update_and_remove() {
        let (catalog, session, notices) = states();
        add_to_cart(&catalog, &session, &notices, CAPS).unwrap();
        add_to_cart(&catalog, &session, &notices, TEES).unwrap();

        let cart = update_quantity(&session, &notices, CAPS, 1).unwrap();
        assert_eq!(cart.lines[0].line.quantity, 2);

        let cart = update_quantity(&session, &notices, TEES, -1).unwrap();
        assert_eq!(cart.lines.len(), 1);

        let err = update_quantity(&session, &notices, CAPS, 10).unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfStock);

        let err = update_quantity(&session, &notices, TEES, 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let cart = remove_from_cart(&session, CAPS);
        assert!(cart.lines.is_empty());
        assert!(remove_from_cart(&session, CAPS).lines.is_empty());
    }

    #[test]
    fn test_add_from_quick_view_closes_modal() {
        let (catalog, session, notices) = states();
        let ui = UiState::new();

        assert!(add_from_quick_view(&catalog, &session, &notices, &ui).is_err());

        ui.with_ui_mut(|u| u.quick_view = Some(TEES));
        let cart = add_from_quick_view(&catalog, &session, &notices, &ui).unwrap();
        assert_eq!(cart.lines[0].line.product_id, TEES);
        assert_eq!(ui.with_ui(|u| u.quick_view), None);
    }

    #[test]
    fn test_checkout_button_state() {
        let (catalog, session, notices) = states();
        add_to_cart(&catalog, &session, &notices, TEES).unwrap();
        add_to_cart(&catalog, &session, &notices, TEES).unwrap();

        let cart = get_cart(&session);
        assert!(cart.can_checkout);
        assert_eq!(cart.checkout_label, "Checkout");

        let cart = set_payment_mode(&session, true);
        assert!(!cart.can_checkout);
    }

    #[test]
    fn test_toggle_cart() {
        let ui = UiState::new();
        assert!(toggle_cart(&ui));
        assert!(!toggle_cart(&ui));
    }
}

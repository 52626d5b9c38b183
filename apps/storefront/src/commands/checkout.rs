//! # Checkout Commands

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::commands::cart::CartResponse;
use crate::state::{NoticeState, SessionState, UiState};
use storefront_core::{Notice, NoticeKind, Settlement};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub settlement: Settlement,
    /// Confirmation or rejection text
    pub message: &'static str,
    /// Notice raised for a rejected settlement
    pub notice: Option<Notice>,
    /// Cart after settlement (empty on success)
    pub cart: CartResponse,
}

/// Settles the cart in the current payment mode.
///
/// The drawer is closed whatever the outcome. A rejection is not an `Err`:
/// the cart is kept and the shopper sees an "Insufficient points!" notice.
pub fn checkout(session: &SessionState, notices: &NoticeState, ui: &UiState) -> CheckoutResponse {
    debug!("checkout command");

    let (settlement, cart) = session.with_session_mut(|s| {
        let settlement = s.checkout();
        s.finish_settlement();
        (settlement, CartResponse::from(&*s))
    });

    ui.with_ui_mut(|u| u.cart_open = false);

    let notice = match settlement {
        Settlement::Success {
            mode,
            points_delta,
            total,
            balance,
        } => {
            info!(mode = ?mode, %total, points_delta, %balance, "Checkout settled");
            None
        }
        Settlement::Rejected { reason } => {
            warn!(?reason, "Checkout rejected");
            NoticeKind::for_settlement(&settlement).map(|kind| notices.raise(kind))
        }
    };

    CheckoutResponse {
        settlement,
        message: settlement.message(),
        notice,
        cart,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::{add_to_cart, set_payment_mode, update_quantity};
    use crate::state::CatalogState;
    use storefront_core::{Money, PaymentMode, Points, ProductId, RejectReason};

    const CAPS: ProductId = ProductId::new(1);
    const TEES: ProductId = ProductId::new(2);

    fn states() -> (CatalogState, SessionState, NoticeState, UiState) {
        (
            CatalogState::default(),
            SessionState::new(5000, 10),
            NoticeState::default(),
            UiState::new(),
        )
    }

    #[test]
    fn test_currency_checkout_earns_points() {
        let (catalog, session, notices, ui) = states();
        add_to_cart(&catalog, &session, &notices, TEES).unwrap();
        add_to_cart(&catalog, &session, &notices, TEES).unwrap();
        ui.with_ui_mut(|u| u.cart_open = true);

        let response = checkout(&session, &notices, &ui);

        assert_eq!(
            response.settlement,
            Settlement::Success {
                mode: PaymentMode::Currency,
                points_delta: 5999,
                total: Money::from_cents(59_998),
                balance: Points::new(10_999),
            }
        );
        assert_eq!(response.message, "Purchase successful! Points earned.");
        assert!(response.notice.is_none());
        assert!(response.cart.lines.is_empty());
        assert!(!ui.with_ui(|u| u.cart_open));
    }

    #[test]
    fn test_points_checkout_spends_points() {
        let (catalog, session, notices, ui) = states();
        set_payment_mode(&session, true);
        add_to_cart(&catalog, &session, &notices, CAPS).unwrap();

        let response = checkout(&session, &notices, &ui);

        assert_eq!(response.message, "Purchase successful!");
        assert_eq!(response.cart.balance, Points::new(3001));
        assert!(response.cart.lines.is_empty());
    }

    #[test]
    fn test_rejected_checkout_keeps_cart() {
        let (catalog, session, notices, ui) = states();
        add_to_cart(&catalog, &session, &notices, TEES).unwrap();
        update_quantity(&session, &notices, TEES, 1).unwrap();
        set_payment_mode(&session, true);
        ui.with_ui_mut(|u| u.cart_open = true);

        let response = checkout(&session, &notices, &ui);

        assert_eq!(
            response.settlement,
            Settlement::Rejected {
                reason: RejectReason::InsufficientPoints {
                    required: Points::new(5998),
                    available: Points::new(5000),
                },
            }
        );
        assert_eq!(response.message, "Insufficient points!");
        assert_eq!(response.notice.unwrap().kind, NoticeKind::InsufficientPoints);
        assert_eq!(response.cart.totals.total_quantity, 2);
        assert_eq!(response.cart.balance, Points::new(5000));
        assert!(!ui.with_ui(|u| u.cart_open));
    }

    #[test]
    fn test_empty_cart_checkout() {
        let (_, session, notices, ui) = states();
        let response = checkout(&session, &notices, &ui);
        assert!(response.settlement.is_success());
        assert_eq!(response.cart.balance, Points::new(5000));
    }
}

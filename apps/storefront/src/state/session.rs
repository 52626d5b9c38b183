//! # Session State
//!
//! Holds the shopper's [`Session`]: cart, points balance, payment mode.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                             │
//! │                                                                         │
//! │  View Action              Command                 Session Change        │
//! │  ───────────              ───────                 ──────────────        │
//! │                                                                         │
//! │  Click Add ──────────────► add_to_cart() ───────► line qty + 1         │
//! │                                                                         │
//! │  Click +/- ──────────────► update_quantity() ───► line qty ± n         │
//! │                                                                         │
//! │  Click X ────────────────► remove_from_cart() ──► line dropped         │
//! │                                                                         │
//! │  Toggle "Pay with points"► set_payment_mode() ──► mode flipped         │
//! │                                                                         │
//! │  Click Checkout ─────────► checkout() ──────────► settle, cart cleared │
//! │                                                                         │
//! │  NOTE: Every operation holds the lock for its whole duration, so        │
//! │        checks and mutation see the same cart.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use storefront_core::{Points, Session};

/// Shared session state.
///
/// `Arc<Mutex<_>>` gives one mutator at a time; commands are applied in the
/// order they acquire the lock.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<Session>>,
}

impl SessionState {
    /// Creates a session with an empty cart and the given balance.
    pub fn new(initial_points: u64, points_per_currency_unit: u64) -> Self {
        let session = Session::new(Points::new(initial_points)).with_earn_rate(points_per_currency_unit);
        SessionState {
            session: Arc::new(Mutex::new(session)),
        }
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        // Session methods check before they mutate, so a poisoned lock
        // still guards a consistent session.
        let session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        let session = Session::default();
        SessionState {
            session: Arc::new(Mutex::new(session)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{Catalog, ProductId};

    #[test]
    fn test_with_session_mut_applies_changes() {
        let state = SessionState::new(5000, 10);
        let catalog = Catalog::seed().unwrap();
        let caps = catalog.get(ProductId::new(1)).unwrap();

        let qty = state.with_session_mut(|s| s.add_to_cart(caps)).unwrap();
        assert_eq!(qty, 1);
        assert_eq!(state.with_session(|s| s.cart().total_quantity()), 1);
    }

    #[test]
    fn test_clones_share_session() {
        let state = SessionState::default();
        let other = state.clone();
        other.with_session_mut(|s| s.set_payment_mode(storefront_core::PaymentMode::Points));
        assert!(state.with_session(|s| s.payment_mode().uses_points()));
        assert_eq!(state.with_session(|s| s.balance()), Points::new(5000));
    }
}

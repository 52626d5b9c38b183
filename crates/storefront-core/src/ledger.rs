//! # Cart & Loyalty Ledger
//!
//! The rules engine: admission checks, quantity updates and checkout
//! settlement over an explicit [`Session`].
//!
//! ## Admission Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  canAdd(product, cart, balance, mode)                                   │
//! │                                                                         │
//! │   in cart: q ──► q < stock? ──no──► OutOfStock                          │
//! │                      │                                                  │
//! │                     yes                                                 │
//! │                      ▼                                                  │
//! │   mode == Points? ──no──────────────────────────────► admitted          │
//! │        │                                                                │
//! │       yes                                                               │
//! │        ▼                                                                │
//! │   balance >= cartPoints + product.points? ──no──► InsufficientPoints    │
//! │        │                                                                │
//! │       yes ──────────────────────────────────────────► admitted          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every check runs against the cart as it is *before* the mutation, so a
//! rejected call never changes the session.
//!
//! ## Example
//! ```rust
//! use storefront_core::{Catalog, CoreError, PaymentMode, Points, ProductId, Session};
//!
//! let catalog = Catalog::seed().unwrap();
//! let caps = catalog.get(ProductId::new(1)).unwrap();
//!
//! let mut session = Session::new(Points::new(5000));
//! session.set_payment_mode(PaymentMode::Points);
//!
//! assert_eq!(session.add_to_cart(caps), Ok(1));
//! assert_eq!(session.add_to_cart(caps), Ok(2));
//! assert!(matches!(
//!     session.add_to_cart(caps),
//!     Err(CoreError::InsufficientPoints { .. })
//! ));
//! assert_eq!(session.cart().points(), Points::new(3998));
//! ```

use crate::cart::{Cart, CartLine};
use crate::checkout::{RejectReason, Settlement, SettlementState};
use crate::error::{CoreError, CoreResult};
use crate::points::Points;
use crate::types::{PaymentMode, Product, ProductId};
use crate::{INITIAL_POINTS_BALANCE, POINTS_PER_CURRENCY_UNIT};

// =============================================================================
// Pure Rules
// =============================================================================

/// Admission check naming the rule that failed.
///
/// Stock is checked before affordability.
pub fn admission(
    product: &Product,
    cart: &Cart,
    balance: Points,
    mode: PaymentMode,
) -> CoreResult<()> {
    let current_qty = cart.quantity_of(product.id);

    if !product.can_hold(current_qty.saturating_add(1)) {
        return Err(CoreError::OutOfStock {
            product_id: product.id,
            name: product.name.clone(),
            stock: product.stock,
            requested: current_qty.saturating_add(1),
        });
    }

    if mode.uses_points() {
        let required = cart.points() + product.points;
        if balance < required {
            return Err(CoreError::InsufficientPoints {
                required,
                available: balance,
            });
        }
    }

    Ok(())
}

/// Whether one more unit of `product` may enter the cart.
pub fn can_add(product: &Product, cart: &Cart, balance: Points, mode: PaymentMode) -> bool {
    admission(product, cart, balance, mode).is_ok()
}

/// Whether the drawer's `+` button is enabled for a line.
pub fn can_increment(line: &CartLine, cart: &Cart, balance: Points, mode: PaymentMode) -> bool {
    line.quantity < line.stock && (!mode.uses_points() || balance >= cart.points() + line.unit_points)
}

/// Whether checkout can succeed. Currency settlement always can.
pub fn can_settle(cart: &Cart, balance: Points, mode: PaymentMode) -> bool {
    !mode.uses_points() || balance >= cart.points()
}

// =============================================================================
// Quantity Change
// =============================================================================

/// Effect of a successful `update_quantity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// Line now holds `quantity` units.
    Updated { quantity: u32 },
    /// Quantity reached zero and the line was dropped.
    Removed,
}

// =============================================================================
// Session
// =============================================================================

/// Per-shopper state: cart, points balance and payment mode.
///
/// Owned by the view layer and passed to the rules by reference. Lives for
/// one session; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    cart: Cart,
    balance: Points,
    mode: PaymentMode,
    earn_rate: u64,
    settlement: SettlementState,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(Points::new(INITIAL_POINTS_BALANCE))
    }
}

impl Session {
    /// Empty cart, currency mode, the given starting balance.
    pub fn new(balance: Points) -> Self {
        Session {
            cart: Cart::new(),
            balance,
            mode: PaymentMode::Currency,
            earn_rate: POINTS_PER_CURRENCY_UNIT,
            settlement: SettlementState::Idle,
        }
    }

    /// Overrides points earned per currency unit on currency checkout.
    pub fn with_earn_rate(mut self, points_per_unit: u64) -> Self {
        self.earn_rate = points_per_unit;
        self
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn balance(&self) -> Points {
        self.balance
    }

    pub fn payment_mode(&self) -> PaymentMode {
        self.mode
    }

    pub fn settlement_state(&self) -> SettlementState {
        self.settlement
    }

    pub fn set_payment_mode(&mut self, mode: PaymentMode) {
        self.mode = mode;
    }

    /// Admission check against this session.
    pub fn can_add(&self, product: &Product) -> bool {
        can_add(product, &self.cart, self.balance, self.mode)
    }

    pub fn admission(&self, product: &Product) -> CoreResult<()> {
        admission(product, &self.cart, self.balance, self.mode)
    }

    /// Adds one unit of `product`.
    ///
    /// ## Behavior
    /// - Admission fails: `Err`, session unchanged
    /// - Product already in cart: quantity + 1
    /// - Otherwise: new line with quantity 1, appended
    ///
    /// ## Returns
    /// The line's new quantity.
    pub fn add_to_cart(&mut self, product: &Product) -> CoreResult<u32> {
        self.admission(product)?;

        if let Some(line) = self.cart.line_mut(product.id) {
            line.quantity += 1;
            return Ok(line.quantity);
        }

        self.cart.push(CartLine::from_product(product, 1));
        Ok(1)
    }

    /// Applies a signed delta to a line's quantity.
    ///
    /// ## Behavior
    /// - No line for `product_id`: `Err(NotInCart)`
    /// - `delta == 0`: no-op
    /// - New quantity <= 0: line removed
    /// - New quantity > stock: `Err(OutOfStock)`, line unchanged
    /// - Points mode, `delta > 0` and the grown cart exceeds the balance:
    ///   `Err(InsufficientPoints)`, line unchanged
    ///
    /// Decrements are never refused for points, even if a mode switch left
    /// the cart above the balance.
    pub fn update_quantity(&mut self, product_id: ProductId, delta: i64) -> CoreResult<QuantityChange> {
        let cart_points = self.cart.points();
        let line = self
            .cart
            .line(product_id)
            .ok_or(CoreError::NotInCart(product_id))?;

        if delta == 0 {
            return Ok(QuantityChange::Updated {
                quantity: line.quantity,
            });
        }

        let new_quantity = i64::from(line.quantity).saturating_add(delta);

        if new_quantity <= 0 {
            self.cart.remove(product_id);
            return Ok(QuantityChange::Removed);
        }

        let new_quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);

        if new_quantity > line.stock {
            return Err(CoreError::OutOfStock {
                product_id,
                name: line.name.clone(),
                stock: line.stock,
                requested: new_quantity,
            });
        }

        if self.mode.uses_points() && delta > 0 {
            let added = u32::try_from(delta).unwrap_or(u32::MAX);
            let required = cart_points + line.unit_points * added;
            if self.balance < required {
                return Err(CoreError::InsufficientPoints {
                    required,
                    available: self.balance,
                });
            }
        }

        if let Some(line) = self.cart.line_mut(product_id) {
            line.quantity = new_quantity;
        }

        Ok(QuantityChange::Updated {
            quantity: new_quantity,
        })
    }

    /// Drops a line unconditionally. Returns whether one existed.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> bool {
        self.cart.remove(product_id)
    }

    /// Settles the cart.
    ///
    /// ## Points Mode
    /// Balance covers cart points: balance -= cart points, cart emptied,
    /// `Success`. Otherwise `Rejected` with cart and balance untouched.
    ///
    /// ## Currency Mode
    /// Always `Success`: balance += floor(total × earn rate), cart emptied.
    /// There is no payment step that could decline.
    ///
    /// The machine stays in the terminal state until `finish_settlement`.
    pub fn checkout(&mut self) -> Settlement {
        if self.settlement.is_terminal() {
            self.finish_settlement();
        }
        self.settlement = SettlementState::Settling;

        let total = self.cart.total();
        let outcome = match self.mode {
            PaymentMode::Points => {
                let cart_points = self.cart.points();
                match self.balance.checked_sub(cart_points) {
                    Some(remaining) => {
                        self.balance = remaining;
                        self.cart.clear();
                        Settlement::Success {
                            mode: PaymentMode::Points,
                            points_delta: -i64::try_from(cart_points.value()).unwrap_or(i64::MAX),
                            total,
                            balance: self.balance,
                        }
                    }
                    None => Settlement::Rejected {
                        reason: RejectReason::InsufficientPoints {
                            required: cart_points,
                            available: self.balance,
                        },
                    },
                }
            }
            PaymentMode::Currency => {
                let earned = Points::earned_for(total, self.earn_rate);
                self.balance += earned;
                self.cart.clear();
                Settlement::Success {
                    mode: PaymentMode::Currency,
                    points_delta: i64::try_from(earned.value()).unwrap_or(i64::MAX),
                    total,
                    balance: self.balance,
                }
            }
        };

        self.settlement = outcome.state();
        outcome
    }

    /// Returns the settlement machine to `Idle` once the view has surfaced
    /// the outcome.
    pub fn finish_settlement(&mut self) {
        self.settlement = SettlementState::Idle;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

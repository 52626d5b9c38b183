//! # Points Module
//!
//! Loyalty points: the second currency of the storefront.
//!
//! Every product carries a point cost next to its price. In points mode the
//! cart is settled from the shopper's balance; in currency mode the shopper
//! earns points on the cart total instead.
//!
//! ```rust
//! use storefront_core::money::Money;
//! use storefront_core::points::Points;
//!
//! // $599.98 at 10 points per dollar
//! let earned = Points::earned_for(Money::from_cents(59_998), 10);
//! assert_eq!(earned.value(), 5999);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

use crate::money::Money;

/// A non-negative loyalty point amount.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Points(u64);

impl Points {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Points(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Points(0)
    }

    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Subtracts `other`, returning `None` if the result would be negative.
    #[inline]
    pub const fn checked_sub(self, other: Points) -> Option<Points> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Points(v)),
            None => None,
        }
    }

    /// Points earned for paying `total` in currency.
    ///
    /// `floor(total × rate)` computed on cents, so `rate` points are earned
    /// per whole currency unit. Negative totals earn nothing.
    pub fn earned_for(total: Money, points_per_unit: u64) -> Points {
        if total.is_negative() {
            return Points::zero();
        }
        let earned = total.cents() as u128 * points_per_unit as u128 / 100;
        Points(u64::try_from(earned).unwrap_or(u64::MAX))
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Points {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Points(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Points {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

/// Multiplication by a cart quantity.
impl Mul<u32> for Points {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Points(self.0.saturating_mul(qty as u64))
    }
}

impl Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Self {
        iter.fold(Points::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Checkout Settlement
//!
//! Outcome types and the state machine for settling a cart.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────┐  checkout()  ┌──────────┐  balance covers   ┌─────────┐      │
//! │   │ Idle │─────────────►│ Settling │──────────────────►│ Success │      │
//! │   └──────┘              └──────────┘  (or currency)    └────┬────┘      │
//! │      ▲                       │                              │           │
//! │      │                       │ points short  ┌──────────┐   │           │
//! │      │                       └──────────────►│ Rejected │   │           │
//! │      │                                       └────┬─────┘   │           │
//! │      │           finish_settlement()              │         │           │
//! │      └────────────────────────────────────────────┴─────────┘           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Currency settlement has no rejection branch: payment is assumed to clear.
//! Only points settlement can be `Rejected`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::points::Points;
use crate::types::PaymentMode;

// =============================================================================
// Settlement State
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SettlementState {
    #[default]
    Idle,
    Settling,
    Success,
    Rejected,
}

impl SettlementState {
    /// Whether the machine is waiting for `finish_settlement`.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, SettlementState::Success | SettlementState::Rejected)
    }
}

// =============================================================================
// Settlement Outcome
// =============================================================================

/// Why a settlement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectReason {
    InsufficientPoints { required: Points, available: Points },
}

/// The result of `Session::checkout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Settlement {
    Success {
        mode: PaymentMode,
        /// Signed change to the balance: negative when points were spent.
        points_delta: i64,
        /// Currency total of the settled cart.
        total: Money,
        /// Balance after settlement.
        balance: Points,
    },
    Rejected { reason: RejectReason },
}

impl Settlement {
    pub const fn is_success(&self) -> bool {
        matches!(self, Settlement::Success { .. })
    }

    pub const fn state(&self) -> SettlementState {
        match self {
            Settlement::Success { .. } => SettlementState::Success,
            Settlement::Rejected { .. } => SettlementState::Rejected,
        }
    }

    /// Confirmation or notice text for the shopper.
    pub fn message(&self) -> &'static str {
        match self {
            Settlement::Success {
                mode: PaymentMode::Points,
                ..
            } => "Purchase successful!",
            Settlement::Success {
                mode: PaymentMode::Currency,
                ..
            } => "Purchase successful! Points earned.",
            Settlement::Rejected {
                reason: RejectReason::InsufficientPoints { .. },
            } => "Insufficient points!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let success = Settlement::Success {
            mode: PaymentMode::Currency,
            points_delta: 5999,
            total: Money::from_cents(59_998),
            balance: Points::new(10_999),
        };
        assert_eq!(success.message(), "Purchase successful! Points earned.");
        assert_eq!(success.state(), SettlementState::Success);

        let rejected = Settlement::Rejected {
            reason: RejectReason::InsufficientPoints {
                required: Points::new(6000),
                available: Points::new(5000),
            },
        };
        assert_eq!(rejected.message(), "Insufficient points!");
        assert!(!rejected.is_success());
        assert!(rejected.state().is_terminal());
    }

    #[test]
    fn test_settlement_serializes_tagged() {
        let rejected = Settlement::Rejected {
            reason: RejectReason::InsufficientPoints {
                required: Points::new(6000),
                available: Points::new(5000),
            },
        };
        let json = serde_json::to_value(rejected).unwrap();
        assert_eq!(json["outcome"], "rejected");
        assert_eq!(json["reason"]["kind"], "insufficient_points");
        assert_eq!(json["reason"]["required"], 6000);
    }
}

//! # Notices
//!
//! Transient messages telling the shopper why an action was refused.
//!
//! A notice carries its own id so a scheduled dismissal can tell whether the
//! notice it was scheduled for is still the one on screen. Scheduling lives in
//! the app crate; this module only describes the notice.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::checkout::{RejectReason, Settlement};
use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    OutOfStock,
    InsufficientPoints,
}

impl NoticeKind {
    pub const fn message(&self) -> &'static str {
        match self {
            NoticeKind::OutOfStock => "Item out of stock!",
            NoticeKind::InsufficientPoints => "Insufficient points!",
        }
    }

    /// The notice for an admission failure, if `err` is one.
    pub fn for_error(err: &CoreError) -> Option<Self> {
        match err {
            CoreError::OutOfStock { .. } => Some(NoticeKind::OutOfStock),
            CoreError::InsufficientPoints { .. } => Some(NoticeKind::InsufficientPoints),
            _ => None,
        }
    }

    /// The notice for a rejected settlement.
    pub fn for_settlement(settlement: &Settlement) -> Option<Self> {
        match settlement {
            Settlement::Rejected {
                reason: RejectReason::InsufficientPoints { .. },
            } => Some(NoticeKind::InsufficientPoints),
            Settlement::Success { .. } => None,
        }
    }
}

/// A notice on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    #[ts(as = "String")]
    pub id: Uuid,
    pub kind: NoticeKind,
    pub message: String,
    #[ts(as = "String")]
    pub raised_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(kind: NoticeKind) -> Self {
        Notice {
            id: Uuid::new_v4(),
            kind,
            message: kind.message().to_string(),
            raised_at: Utc::now(),
        }
    }
}

/// Label for a product's "Add to Cart" button.
///
/// ```rust
/// use storefront_core::notice::add_button_label;
///
/// assert_eq!(add_button_label(&Ok(())), "Add to Cart");
/// ```
pub fn add_button_label(admission: &Result<(), CoreError>) -> &'static str {
    match admission {
        Ok(()) => "Add to Cart",
        Err(CoreError::InsufficientPoints { .. }) => "Insufficient Points",
        Err(_) => "Out of Stock",
    }
}

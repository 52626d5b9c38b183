//! # Newsletter Commands

use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::UiState;
use storefront_core::validation::validate_email;

/// Signs an address up for the newsletter.
///
/// The address is trimmed before it is stored. Subscribing twice is accepted
/// and keeps a single entry.
pub fn subscribe(ui: &UiState, email: &str) -> Result<&'static str, ApiError> {
    debug!("subscribe command");

    let email = validate_email(email)?;

    ui.with_ui_mut(|u| {
        if u.subscribers.contains(&email) {
            debug!(%email, "Already subscribed");
        } else {
            info!(%email, "Newsletter subscription");
            u.subscribers.push(email);
        }
    });

    Ok("Subscribed!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_subscribe() {
        let ui = UiState::new();
        assert_eq!(subscribe(&ui, "  shopper@example.com ").unwrap(), "Subscribed!");
        assert_eq!(subscribe(&ui, "shopper@example.com").unwrap(), "Subscribed!");
        assert_eq!(ui.with_ui(|u| u.subscribers.clone()), vec!["shopper@example.com"]);
    }

    #[test]
    fn test_subscribe_rejects_bad_address() {
        let ui = UiState::new();
        for email in ["", "shopper", "@example.com", "shopper@example", "a@b@c.com"] {
            let err = subscribe(&ui, email).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationError, "{email}");
        }
        assert!(ui.with_ui(|u| u.subscribers.is_empty()));
    }
}

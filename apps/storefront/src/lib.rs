//! # Codestrive Storefront Library
//!
//! Session layer between the storefront view and `storefront-core`.
//!
//! ## Module Organization
//! ```text
//! storefront_app/
//! ├── lib.rs          ◄─── You are here (state bundle & logging setup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Read-only product catalog
//! │   ├── session.rs  ◄─── Cart, balance, payment mode
//! │   ├── notice.rs   ◄─── Notice slot + dismissal timer
//! │   ├── ui.rs       ◄─── Drawer, modal, carousel, grid flags
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Grid, quick view, carousel
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── checkout.rs ◄─── Settlement
//! │   └── newsletter.rs
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_app::commands::{cart, checkout};
//! use storefront_app::Storefront;
//! use storefront_core::{Points, ProductId};
//!
//! let store = Storefront::default();
//! cart::add_to_cart(&store.catalog, &store.session, &store.notices, ProductId::new(1)).unwrap();
//!
//! let outcome = checkout::checkout(&store.session, &store.notices, &store.ui);
//! assert_eq!(outcome.cart.balance, Points::new(6999));
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{CatalogState, ConfigState, NoticeState, SessionState, UiState};

/// Every state object a view holds for one shopper session.
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Session Startup                                   │
/// │                                                                         │
/// │  1. Load ConfigState ─────────────────────────────────────────────────► │
/// │     • Defaults, then STOREFRONT_* overrides                             │
/// │                                                                         │
/// │  2. Build State Objects ──────────────────────────────────────────────► │
/// │     • CatalogState: seeded catalog                                      │
/// │     • SessionState: empty cart, initial points, currency mode           │
/// │     • NoticeState: empty slot, configured dismissal delay               │
/// │     • UiState: drawer closed, "All", "featured"                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone)]
pub struct Storefront {
    pub config: ConfigState,
    pub catalog: CatalogState,
    pub session: SessionState,
    pub notices: NoticeState,
    pub ui: UiState,
}

impl Storefront {
    pub fn new(config: ConfigState) -> Self {
        let session = SessionState::new(config.initial_points, config.points_per_currency_unit);
        let notices = NoticeState::new(config.notice_dismiss_after());

        info!(
            store = %config.store_name,
            initial_points = config.initial_points,
            notice_ms = config.notice_dismiss_ms,
            "Storefront session initialized"
        );

        Storefront {
            catalog: CatalogState::default(),
            session,
            notices,
            ui: UiState::new(),
            config,
        }
    }

    /// A session configured from the environment.
    pub fn from_env() -> Self {
        Storefront::new(ConfigState::from_env())
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Storefront::new(ConfigState::default())
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_core=trace` - Narrow to one crate
/// - Default: INFO, DEBUG for the storefront crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug,storefront_app=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use storefront_core::Points;

    #[test]
    fn test_storefront_from_config() {
        let config = ConfigState {
            initial_points: 250,
            notice_dismiss_ms: 10,
            ..ConfigState::default()
        };
        let store = Storefront::new(config);

        assert_eq!(store.session.with_session(|s| s.balance()), Points::new(250));
        assert_eq!(store.catalog.inner().len(), 3);
        assert!(store.notices.current().is_none());
        assert!(!store.ui.with_ui(|u| u.cart_open));
        assert_eq!(store.config.notice_dismiss_after(), Duration::from_millis(10));
    }
}

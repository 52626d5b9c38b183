//! # State Module
//!
//! Session-lifetime state the view layer owns and hands to commands.
//!
//! ## Why Multiple State Types?
//! Each command takes only the state it touches, so a command's signature
//! says what it can change.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │ CatalogState │ │ SessionState │ │ NoticeState  │ │   UiState    │   │
//! │  │              │ │              │ │              │ │              │   │
//! │  │  Arc<        │ │  Arc<Mutex<  │ │  notice slot │ │  drawer,     │   │
//! │  │   Catalog>   │ │   Session>>  │ │  + dismissal │ │  modal,      │   │
//! │  │  (read-only) │ │              │ │    task      │ │  carousel    │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  ConfigState: read-only after startup                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod notice;
mod session;
mod ui;

pub use catalog::CatalogState;
pub use config::{ConfigError, ConfigState};
pub use notice::NoticeState;
pub use session::SessionState;
pub use ui::{Ui, UiState};

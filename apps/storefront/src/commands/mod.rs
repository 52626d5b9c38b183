//! # Commands Module
//!
//! Everything the view can dispatch.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── catalog.rs     ◄─── Grid filter/sort, quick view, carousel
//! ├── cart.rs        ◄─── Add, +/-, remove, payment mode, drawer
//! ├── checkout.rs    ◄─── Settlement
//! └── newsletter.rs  ◄─── Footer sign-up form
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  View event (click "Add to Cart" on Cool Tees)                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::cart::add_to_cart(                                           │
//! │      &catalog,        ◄── only the state it needs                      │
//! │      &session,                                                          │
//! │      &notices,                                                          │
//! │      ProductId::new(2),                                                 │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         │ (serde, camelCase)                                            │
//! │         ▼                                                               │
//! │  View re-renders drawer, badge and Add buttons                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands run to completion one at a time against the session lock, in
//! the order the view dispatches them.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod newsletter;

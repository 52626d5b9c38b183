//! # UI State
//!
//! Presentation flags the view re-renders from: cart drawer, quick-view
//! modal, carousel position, grid filter/sort, newsletter sign-ups.
//!
//! None of this feeds the ledger rules; checkout only clears `cart_open`.

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use storefront_core::{CategoryFilter, ProductId, SortOrder};

/// Snapshot of the view flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ui {
    pub cart_open: bool,
    pub quick_view: Option<ProductId>,
    pub carousel_index: usize,
    pub filter: CategoryFilter,
    pub sort: SortOrder,
    /// Newsletter addresses collected this session
    pub subscribers: Vec<String>,
}

impl Ui {
    /// Moves the carousel forward, wrapping to the first slide.
    pub fn carousel_next(&mut self, slides: usize) {
        self.carousel_index = if slides == 0 || self.carousel_index + 1 >= slides {
            0
        } else {
            self.carousel_index + 1
        };
    }

    /// Moves the carousel back, wrapping to the last slide.
    pub fn carousel_previous(&mut self, slides: usize) {
        self.carousel_index = match (slides, self.carousel_index) {
            (0, _) => 0,
            (n, 0) => n - 1,
            (n, i) => (i - 1).min(n - 1),
        };
    }
}

/// Shared UI state.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    ui: Arc<Mutex<Ui>>,
}

impl UiState {
    pub fn new() -> Self {
        UiState::default()
    }

    pub fn with_ui<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Ui) -> R,
    {
        let ui = self.ui.lock().unwrap_or_else(PoisonError::into_inner);
        f(&ui)
    }

    pub fn with_ui_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Ui) -> R,
    {
        let mut ui = self.ui.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_wraps_forward() {
        let mut ui = Ui::default();
        ui.carousel_next(3);
        ui.carousel_next(3);
        assert_eq!(ui.carousel_index, 2);
        ui.carousel_next(3);
        assert_eq!(ui.carousel_index, 0);
    }

    #[test]
    fn test_carousel_wraps_backward() {
        let mut ui = Ui::default();
        ui.carousel_previous(3);
        assert_eq!(ui.carousel_index, 2);
        ui.carousel_previous(3);
        assert_eq!(ui.carousel_index, 1);
    }

    #[test]
    fn test_carousel_empty() {
        let mut ui = Ui::default();
        ui.carousel_next(0);
        ui.carousel_previous(0);
        assert_eq!(ui.carousel_index, 0);
    }
}

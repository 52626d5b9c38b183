//! # Notice State
//!
//! The notice currently on screen and its scheduled dismissal.
//!
//! ## Dismissal Timeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  t=0     raise(A) ──► slot = A, spawn timer(A, 3s)                      │
//! │  t=2s    raise(B) ──► abort timer(A), slot = B, spawn timer(B, 3s)      │
//! │  t=3s    (timer A would have fired here; it was aborted)                │
//! │  t=5s    timer(B) fires ──► slot.id == B? ──► slot = None               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A timer only clears the notice it was scheduled for, so a late timer can
//! never hide a newer notice.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use storefront_core::{Notice, NoticeKind};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Debug)]
struct ActiveNotice {
    notice: Notice,
    dismissal: Option<JoinHandle<()>>,
}

impl ActiveNotice {
    fn cancel_dismissal(&mut self) {
        if let Some(handle) = self.dismissal.take() {
            handle.abort();
        }
    }
}

type Slot = Arc<Mutex<Option<ActiveNotice>>>;

fn lock(slot: &Slot) -> std::sync::MutexGuard<'_, Option<ActiveNotice>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The single notice slot.
#[derive(Debug, Clone)]
pub struct NoticeState {
    dismiss_after: Duration,
    slot: Slot,
}

impl NoticeState {
    pub fn new(dismiss_after: Duration) -> Self {
        NoticeState {
            dismiss_after,
            slot: Arc::new(Mutex::new(None)),
        }
    }

    /// Shows a notice, replacing any current one and restarting the timer.
    ///
    /// Dismissal needs a Tokio runtime; without one the notice stays until
    /// `dismiss` is called.
    pub fn raise(&self, kind: NoticeKind) -> Notice {
        let notice = Notice::new(kind);
        let mut slot = lock(&self.slot);

        if let Some(previous) = slot.as_mut() {
            debug!(previous = %previous.notice.id, "Replacing notice");
            previous.cancel_dismissal();
        }

        let dismissal = match Handle::try_current() {
            Ok(handle) => Some(handle.spawn(dismiss_later(
                Arc::clone(&self.slot),
                notice.id,
                self.dismiss_after,
            ))),
            Err(_) => {
                warn!(notice = %notice.id, "No runtime, notice will not auto-dismiss");
                None
            }
        };

        debug!(notice = %notice.id, kind = ?kind, "Notice raised");
        *slot = Some(ActiveNotice {
            notice: notice.clone(),
            dismissal,
        });
        notice
    }

    /// The notice on screen, if any.
    pub fn current(&self) -> Option<Notice> {
        lock(&self.slot).as_ref().map(|active| active.notice.clone())
    }

    /// Closes notice `id` early. Returns false if it is no longer shown.
    pub fn dismiss(&self, id: Uuid) -> bool {
        let mut slot = lock(&self.slot);
        match slot.as_mut() {
            Some(active) if active.notice.id == id => {
                active.cancel_dismissal();
                *slot = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for NoticeState {
    fn default() -> Self {
        NoticeState::new(Duration::from_millis(storefront_core::NOTICE_DISMISS_MS))
    }
}

async fn dismiss_later(slot: Slot, id: Uuid, after: Duration) {
    tokio::time::sleep(after).await;

    let mut slot = lock(&slot);
    if slot.as_ref().is_some_and(|active| active.notice.id == id) {
        *slot = None;
        debug!(notice = %id, "Notice dismissed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn test_notice_auto_dismisses() {
        let state = NoticeState::new(Duration::from_secs(3));
        let notice = state.raise(NoticeKind::OutOfStock);

        sleep(Duration::from_millis(2999)).await;
        assert_eq!(state.current().map(|n| n.id), Some(notice.id));

        sleep(Duration::from_millis(2)).await;
        assert!(state.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_notice_restarts_timer() {
        let state = NoticeState::new(Duration::from_secs(3));
        state.raise(NoticeKind::InsufficientPoints);

        sleep(Duration::from_secs(2)).await;
        let second = state.raise(NoticeKind::OutOfStock);

        // First timer's deadline has passed; the second notice must survive it
        sleep(Duration::from_millis(1500)).await;
        let shown = state.current().unwrap();
        assert_eq!(shown.id, second.id);
        assert_eq!(shown.message, "Item out of stock!");

        sleep(Duration::from_millis(1600)).await;
        assert!(state.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_dismiss() {
        let state = NoticeState::new(Duration::from_secs(3));
        let notice = state.raise(NoticeKind::OutOfStock);

        assert!(!state.dismiss(Uuid::new_v4()));
        assert!(state.dismiss(notice.id));
        assert!(state.current().is_none());
        assert!(!state.dismiss(notice.id));
    }

    #[test]
    fn test_raise_without_runtime_keeps_notice() {
        let state = NoticeState::default();
        let notice = state.raise(NoticeKind::InsufficientPoints);
        assert_eq!(state.current().unwrap().id, notice.id);
    }
}

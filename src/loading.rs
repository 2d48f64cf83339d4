//! Loading Overlay State
//!
//! Depth-counted overlay bookkeeping plus a scoped guard. Overlapping
//! operations each hold a guard; the overlay stays visible until the last
//! one releases, so no operation can hide an overlay another still owns.

use leptos::prelude::*;

use crate::store::{AppStateStoreFields, AppStore};

/// Counted visibility state for the blocking overlay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayState {
    depth: u32,
    text: String,
}

impl OverlayState {
    /// Enter a loading section; the overlay shows `text` while any
    /// section is active.
    pub fn begin(&mut self, text: &str) {
        self.depth += 1;
        self.text = text.to_string();
    }

    /// Leave a loading section. Saturates at zero.
    pub fn end(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn visible(&self) -> bool {
        self.depth > 0
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Scoped overlay acquisition tied to the store.
///
/// Dropping the guard releases the overlay, which covers every exit path
/// of an async operation: success, backend error, transport error.
pub struct LoadingGuard {
    store: AppStore,
}

impl LoadingGuard {
    pub fn begin(store: AppStore, text: &str) -> Self {
        store.loading().write().begin(text);
        Self { store }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.store.loading().write().end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_end_toggles_visibility() {
        let mut overlay = OverlayState::default();
        assert!(!overlay.visible());

        overlay.begin("Loading stocks...");
        assert!(overlay.visible());
        assert_eq!(overlay.text(), "Loading stocks...");

        overlay.end();
        assert!(!overlay.visible());
    }

    #[test]
    fn test_overlapping_sections_keep_overlay_shown() {
        let mut overlay = OverlayState::default();
        overlay.begin("Loading stocks...");
        overlay.begin("Updating live prices...");

        // First finisher must not hide the overlay the second still owns
        overlay.end();
        assert!(overlay.visible());
        assert_eq!(overlay.text(), "Updating live prices...");

        overlay.end();
        assert!(!overlay.visible());
    }

    #[test]
    fn test_text_follows_most_recent_begin() {
        let mut overlay = OverlayState::default();
        overlay.begin("Adding stock...");
        overlay.begin("Processing file with OCR/Excel analysis...");
        assert_eq!(overlay.text(), "Processing file with OCR/Excel analysis...");
    }

    #[test]
    fn test_end_saturates_at_zero() {
        let mut overlay = OverlayState::default();
        overlay.end();
        assert!(!overlay.visible());

        overlay.begin("Loading stocks...");
        assert!(overlay.visible());
    }
}

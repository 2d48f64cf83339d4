//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::loading::OverlayState;
use crate::models::Stock;

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Authoritative stock list from the latest fetch
    pub stocks: Vec<Stock>,
    /// Blocking overlay bookkeeping
    pub loading: OverlayState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Replace the board contents with a freshly fetched list
pub fn store_set_stocks(store: &AppStore, stocks: Vec<Stock>) {
    *store.stocks().write() = stocks;
}

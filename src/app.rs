//! Watchlist Frontend App
//!
//! Main application component: board, header actions, modal, overlay.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{alert, AddStockModal, LoadingOverlay, WatchBoard};
use crate::config::BoardConfig;
use crate::context::AppContext;
use crate::loading::LoadingGuard;
use crate::store::{store_set_stocks, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let config = BoardConfig::load();

    // State
    let store: AppStore = Store::new(AppState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (add_modal_open, set_add_modal_open) = signal(false);

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        (add_modal_open, set_add_modal_open),
    ));
    provide_context(config.clone());

    let api_base = StoredValue::new(config.api_base.clone());

    // Initial load, and re-fetch after every mutation
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Fetching stocks, trigger={}", trigger).into());
        let api_base = api_base.get_value();
        let guard = LoadingGuard::begin(store, "Loading stocks...");
        spawn_local(async move {
            let _guard = guard;
            match api::list_stocks(&api_base).await {
                Ok(stocks) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} stocks", stocks.len()).into(),
                    );
                    store_set_stocks(&store, stocks);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Loading stocks failed: {}", e).into());
                    alert("Error loading stocks");
                }
            }
        });
    });

    let update_prices = move |_| {
        let api_base = api_base.get_value();
        let guard = LoadingGuard::begin(store, "Updating live prices...");
        spawn_local(async move {
            let _guard = guard;
            match api::update_prices(&api_base).await {
                Ok(stocks) => store_set_stocks(&store, stocks),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[APP] Price update failed: {}", e).into(),
                    );
                    alert("Error updating prices");
                }
            }
        });
    };

    view! {
        <div class="app-layout">
            <header class="board-header">
                <h1>"Watchlist"</h1>
                <div class="board-actions">
                    <button class="update-btn" on:click=update_prices>
                        "Update Prices"
                    </button>
                    <button class="add-btn" on:click=move |_| set_add_modal_open.set(true)>
                        "Add Stock"
                    </button>
                </div>
            </header>

            <WatchBoard />

            <p class="stock-count">
                {move || format!("{} stocks tracked", store.stocks().get().len())}
            </p>

            <AddStockModal />
            <LoadingOverlay />
        </div>
    }
}

//! Add Stock Modal Component
//!
//! Modal form for adding a single ticker to a strategy bucket.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, AddStockArgs, ApiError};
use crate::components::{alert, StrategySelector};
use crate::config::BoardConfig;
use crate::context::AppContext;
use crate::loading::LoadingGuard;
use crate::store::use_app_store;

#[component]
pub fn AddStockModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let config = use_context::<BoardConfig>().expect("BoardConfig should be provided");

    let default_key = config
        .strategies
        .first()
        .map(|bucket| bucket.key.clone())
        .unwrap_or_default();
    let (ticker, set_ticker) = signal(String::new());
    let (strategy, set_strategy) = signal(default_key);

    let api_base = StoredValue::new(config.api_base.clone());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let ticker_value = ticker.get();
        if ticker_value.is_empty() {
            alert("Please enter a ticker");
            return;
        }
        let strategy_value = strategy.get();
        let api_base = api_base.get_value();
        let guard = LoadingGuard::begin(store, "Adding stock...");
        spawn_local(async move {
            let _guard = guard;
            let args = AddStockArgs {
                ticker: &ticker_value,
                strategy: &strategy_value,
            };
            match api::add_stock(&api_base, &args).await {
                Ok(_) => {
                    ctx.reload();
                    ctx.close_add_modal();
                    set_ticker.set(String::new());
                }
                // Modal stays open and the input keeps its value
                Err(ApiError::Backend(msg)) => alert(&msg),
                Err(e) => {
                    web_sys::console::error_1(&format!("[MODAL] Add failed: {}", e).into());
                    alert("Error adding stock");
                }
            }
        });
    };

    view! {
        <Show when=move || ctx.add_modal_open.get()>
            <div class="modal-backdrop">
                <div class="add-modal">
                    <h2>"Add Stock"</h2>
                    <form class="add-stock-form" on:submit=submit>
                        <input
                            type="text"
                            placeholder="Ticker (e.g. NVDA)"
                            prop:value=move || ticker.get()
                            on:input=move |ev| set_ticker.set(event_target_value(&ev))
                        />
                        <StrategySelector
                            strategies=config.strategies.clone()
                            current_key=strategy
                            on_change=move |key| set_strategy.set(key)
                        />
                        <div class="modal-actions">
                            <button type="submit">"Add"</button>
                            <button
                                type="button"
                                class="cancel-btn"
                                on:click=move |_| ctx.close_add_modal()
                            >
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

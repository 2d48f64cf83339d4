//! Stock Card Component
//!
//! Single watchlist entry: ticker, prices, performance, delete action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{alert, DeleteConfirmButton};
use crate::config::BoardConfig;
use crate::context::AppContext;
use crate::format;
use crate::loading::LoadingGuard;
use crate::models::Stock;
use crate::store::use_app_store;

#[component]
pub fn StockCard(stock: Stock) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let config = use_context::<BoardConfig>().expect("BoardConfig should be provided");

    let id = stock.id;
    let api_base = StoredValue::new(config.api_base.clone());

    let on_delete = move |_: ()| {
        let api_base = api_base.get_value();
        let guard = LoadingGuard::begin(store, "Deleting stock...");
        spawn_local(async move {
            let _guard = guard;
            if let Err(e) = api::delete_stock(&api_base, id).await {
                web_sys::console::error_1(&format!("[CARD] Delete {} failed: {}", id, e).into());
                alert("Error deleting stock");
            }
            // The fresh list is authoritative either way
            ctx.reload();
        });
    };

    let date_badge = config
        .fields
        .added_date
        .then(|| stock.added_date.clone())
        .flatten()
        .map(|raw| format::short_date(&raw));
    let daily = config
        .fields
        .daily_change
        .then_some(stock.daily_change)
        .flatten();

    view! {
        <div class="stock-item">
            <div class="stock-info">
                <div class="stock-head">
                    <span class="stock-ticker">{stock.ticker.clone()}</span>
                    {date_badge.map(|badge| view! { <span class="stock-date">{badge}</span> })}
                </div>
                <div class="stock-price">
                    <span>"Entry: " {format::price(stock.entry_price)}</span>
                    <span>"Cur: " {format::price(stock.current_price)}</span>
                </div>
            </div>
            <div class="stock-performance">
                <div class=format::perf_class(stock.roi)>
                    {format!("Total: {}", format::signed_pct(stock.roi))}
                </div>
                {daily.map(|change| view! {
                    <div class=format::perf_class(change)>
                        {format!("Daily: {}", format::signed_pct_fixed(change))}
                    </div>
                })}
                <DeleteConfirmButton button_class="delete-btn" on_confirm=on_delete />
            </div>
        </div>
    }
}

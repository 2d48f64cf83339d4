//! Watch Board Component
//!
//! The full board: one column per configured bucket, plus an Uncategorized
//! column for stocks whose strategy key matches nothing. Those used to be
//! dropped silently; now they stay visible and are called out on the console.

use leptos::prelude::*;

use crate::components::{StockCard, StrategyColumn};
use crate::components::strategy_column::stock_render_key;
use crate::config::BoardConfig;
use crate::grouping::{group_by_strategy, GroupedStocks};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn WatchBoard() -> impl IntoView {
    let store = use_app_store();
    let config = use_context::<BoardConfig>().expect("BoardConfig should be provided");

    let strategies = StoredValue::new(config.strategies.clone());
    let grouped: Memo<GroupedStocks> = Memo::new(move |_| {
        group_by_strategy(&strategies.get_value(), &store.stocks().get())
    });

    Effect::new(move |_| {
        let unknown = grouped.get().unrecognized;
        if !unknown.is_empty() {
            let mut keys: Vec<String> = unknown.iter().map(|s| s.strategy.clone()).collect();
            keys.sort();
            keys.dedup();
            web_sys::console::warn_1(
                &format!(
                    "[BOARD] {} stocks with unknown strategy keys: {:?}",
                    unknown.len(),
                    keys
                )
                .into(),
            );
        }
    });

    view! {
        <div class="watch-board">
            {config.strategies.iter().enumerate().map(|(idx, bucket)| {
                let stocks = Memo::new(move |_| {
                    grouped
                        .get()
                        .buckets
                        .get(idx)
                        .map(|(_, members)| members.clone())
                        .unwrap_or_default()
                });
                view! { <StrategyColumn bucket=bucket.clone() stocks=stocks /> }
            }).collect_view()}

            <Show when=move || !grouped.get().unrecognized.is_empty()>
                <section class="strategy-column uncategorized">
                    <header class="column-header">
                        <h2>"Uncategorized"</h2>
                        <span class="column-count">
                            {move || grouped.get().unrecognized.len()}
                        </span>
                    </header>
                    <div class="stock-list">
                        <For
                            each=move || grouped.get().unrecognized
                            key=stock_render_key
                            children=move |stock| view! { <StockCard stock=stock /> }
                        />
                    </div>
                </section>
            </Show>
        </div>
    }
}

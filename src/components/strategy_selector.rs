//! Strategy Selector Component
//!
//! Bucket picker buttons for the add-stock form.

use leptos::prelude::*;

use crate::config::StrategyBucket;

/// Strategy selector buttons, one per configured bucket
#[component]
pub fn StrategySelector(
    strategies: Vec<StrategyBucket>,
    current_key: ReadSignal<String>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="strategy-selector">
            {strategies.into_iter().map(|bucket| {
                let label = bucket.label().to_string();
                let key = bucket.key;
                let key_clone = key.clone();
                let is_selected = move || current_key.get() == key;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "strategy-btn active" } else { "strategy-btn" }
                        on:click=move |_| on_change(key_clone.clone())
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

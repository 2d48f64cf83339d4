//! Strategy Column Component
//!
//! One board column: bucket heading, member count, upload action, cards.

use leptos::prelude::*;

use crate::components::{StockCard, UploadButton};
use crate::config::StrategyBucket;
use crate::models::Stock;

#[component]
pub fn StrategyColumn(
    bucket: StrategyBucket,
    #[prop(into)] stocks: Signal<Vec<Stock>>,
) -> impl IntoView {
    let label = bucket.label().to_string();
    let key = bucket.key;

    view! {
        <section class="strategy-column">
            <header class="column-header">
                <h2>{label}</h2>
                <span class="column-count">{move || stocks.get().len()}</span>
                <UploadButton strategy_key=key />
            </header>
            <div class="stock-list">
                <For
                    each=move || stocks.get()
                    key=stock_render_key
                    children=move |stock| view! { <StockCard stock=stock /> }
                />
            </div>
        </section>
    }
}

/// Keyed on every field a refresh can change, so updated prices re-render
/// their card.
pub fn stock_render_key(stock: &Stock) -> (u32, u64, u64, Option<u64>) {
    (
        stock.id,
        stock.current_price.to_bits(),
        stock.roi.to_bits(),
        stock.daily_change.map(f64::to_bits),
    )
}

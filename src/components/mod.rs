//! UI Components
//!
//! Reusable Leptos components.

mod add_stock_modal;
mod delete_confirm_button;
mod loading_overlay;
mod stock_card;
mod strategy_column;
mod strategy_selector;
mod upload_button;
mod watch_board;

pub use add_stock_modal::AddStockModal;
pub use delete_confirm_button::DeleteConfirmButton;
pub use loading_overlay::LoadingOverlay;
pub use stock_card::StockCard;
pub use strategy_column::StrategyColumn;
pub use strategy_selector::StrategySelector;
pub use upload_button::UploadButton;
pub use watch_board::WatchBoard;

/// Blocking failure dialog, the board's only error surface
pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

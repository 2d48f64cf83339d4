//! Upload Button Component
//!
//! Per-column bulk add: a hidden file input plus the button that opens it.
//! The column's strategy key travels in the change handler's closure, so
//! two columns can never race over a shared pending-upload slot.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiError};
use crate::components::alert;
use crate::config::BoardConfig;
use crate::context::AppContext;
use crate::loading::LoadingGuard;
use crate::store::use_app_store;

#[component]
pub fn UploadButton(strategy_key: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let config = use_context::<BoardConfig>().expect("BoardConfig should be provided");

    let api_base = StoredValue::new(config.api_base.clone());
    let strategy = StoredValue::new(strategy_key);
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    let on_pick = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        let api_base = api_base.get_value();
        let strategy = strategy.get_value();
        let guard = LoadingGuard::begin(store, "Processing file with OCR/Excel analysis...");
        spawn_local(async move {
            let _guard = guard;
            match api::upload_file(&api_base, &file, &strategy).await {
                Ok(added) => {
                    ctx.reload();
                    alert(&format!("Successfully added {} stocks!", added.len()));
                }
                Err(ApiError::Backend(msg)) => alert(&msg),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[UPLOAD] {} upload failed: {}", strategy, e).into(),
                    );
                    alert("Error uploading file");
                }
            }
            // Allow re-picking the same file
            input.set_value("");
        });
    };

    view! {
        <input
            type="file"
            class="upload-input"
            style="display: none;"
            accept=".png,.jpg,.jpeg,.xlsx,.xls,.csv"
            node_ref=input_ref
            on:change=on_change
        />
        <button class="upload-btn" title="Bulk add from screenshot or sheet" on:click=on_pick>
            "⇪"
        </button>
    }
}

//! Loading Overlay Component
//!
//! Blocking overlay shown while any operation holds a loading guard.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Full-screen overlay with the active operation's text
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || store.loading().get().visible()>
            <div class="loading-overlay">
                <div class="spinner"></div>
                <p class="loading-text">
                    {move || store.loading().get().text().to_string()}
                </p>
            </div>
        </Show>
    }
}

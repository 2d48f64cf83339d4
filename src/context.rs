//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to re-fetch the stock list from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to re-fetch the stock list from the backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Add-stock modal visibility - read
    pub add_modal_open: ReadSignal<bool>,
    /// Add-stock modal visibility - write
    set_add_modal_open: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        add_modal_open: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            add_modal_open: add_modal_open.0,
            set_add_modal_open: add_modal_open.1,
        }
    }

    /// Trigger a re-fetch of the stock list
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn open_add_modal(&self) {
        self.set_add_modal_open.set(true);
    }

    pub fn close_add_modal(&self) {
        self.set_add_modal_open.set(false);
    }
}

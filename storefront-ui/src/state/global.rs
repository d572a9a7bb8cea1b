//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use storefront::Notice;

use crate::api::{self, GlooStoreApi};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Backend client used by every page
    pub api: GlooStoreApi,
    /// Notices currently on screen, oldest first
    pub notices: RwSignal<Vec<ToastEntry>>,
    next_id: StoredValue<u64>,
}

/// A notice with the id used to dismiss it
#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub notice: Notice,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        api: GlooStoreApi::new(api::get_api_base()),
        notices: create_rw_signal(Vec::new()),
        next_id: store_value(0),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a notice (auto-clears after its duration)
    pub fn notify(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        let timeout_ms = u32::try_from(notice.auto_close.as_millis()).unwrap_or(u32::MAX);
        self.notices.update(|notices| notices.push(ToastEntry { id, notice }));

        let notices = self.notices;
        gloo_timers::callback::Timeout::new(timeout_ms, move || {
            notices.update(|notices| remove_entry(notices, id));
        })
        .forget();
    }

    pub fn notify_all(&self, notices: Vec<Notice>) {
        for notice in notices {
            self.notify(notice);
        }
    }

    /// Dismiss a notice before it times out
    pub fn dismiss(&self, id: u64) {
        self.notices.update(|notices| remove_entry(notices, id));
    }
}

fn remove_entry(notices: &mut Vec<ToastEntry>, id: u64) {
    notices.retain(|entry| entry.id != id);
}

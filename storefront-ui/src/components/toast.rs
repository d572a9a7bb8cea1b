//! Toast Notification Component
//!
//! Shows the notices held in global state.

use leptos::*;
use storefront::NoticeLevel;

use crate::state::{GlobalState, ToastEntry};

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let notices = state.notices;

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2">
            <For
                each=move || notices.get()
                key=|entry| entry.id
                children=move |entry: ToastEntry| {
                    let state = state.clone();
                    view! { <ToastMessage entry=entry on_dismiss=move |id| state.dismiss(id) /> }
                }
            />
        </div>
    }
}

#[component]
fn ToastMessage(entry: ToastEntry, on_dismiss: impl Fn(u64) + 'static) -> impl IntoView {
    let (icon, bg_class) = toast_style(entry.notice.level);
    let id = entry.id;

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{entry.notice.text}</span>
            <button
                class="ml-2 text-white/70 hover:text-white"
                aria-label="Dismiss"
                on:click=move |_| on_dismiss(id)
            >
                "×"
            </button>
        </div>
    }
}

fn toast_style(level: NoticeLevel) -> (&'static str, &'static str) {
    match level {
        NoticeLevel::Success => ("✓", "bg-green-600"),
        NoticeLevel::Error => ("✕", "bg-red-600"),
        NoticeLevel::Info => ("ℹ", "bg-blue-600"),
    }
}

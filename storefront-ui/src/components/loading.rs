//! Loading Component

use leptos::*;

/// Full-width loading spinner
#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

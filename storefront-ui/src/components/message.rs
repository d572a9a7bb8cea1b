//! Message Banner Component
//!
//! Inline info / success / danger banner.

use leptos::*;
use storefront::{Message, MessageVariant};

/// Inline message banner
#[component]
pub fn MessageBanner(message: Message) -> impl IntoView {
    view! {
        <div
            class=format!("p-4 rounded-lg text-sm {}", banner_class(message.variant))
            data-variant=message.variant.as_str()
        >
            {message.text}
        </div>
    }
}

fn banner_class(variant: MessageVariant) -> &'static str {
    match variant {
        MessageVariant::Info => "bg-blue-100 text-blue-800",
        MessageVariant::Success => "bg-green-100 text-green-800",
        MessageVariant::Danger => "bg-red-100 text-red-800",
    }
}

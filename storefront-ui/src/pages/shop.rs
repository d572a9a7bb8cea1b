//! Shop Page

use leptos::*;
use storefront::{CatalogContent, QueryState, StoreApi};

use super::home::CatalogGrid;
use crate::state::GlobalState;

/// Every product in the catalog, without the home page hero
#[component]
pub fn Shop() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let api = state.api.clone();
    let products = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { QueryState::from(api.search_products(None).await) }
        },
    );

    let content = Signal::derive(move || {
        products
            .with(storefront::pages::catalog_content)
            .unwrap_or(CatalogContent::Loading)
    });

    view! {
        <div class="container mx-auto px-4">
            <h1 class="text-3xl font-bold mt-10">"Shop"</h1>
            <CatalogGrid content=content />
        </div>
    }
}

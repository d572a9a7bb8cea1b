//! Home Page
//!
//! Catalog grid, optionally narrowed by the `/search/:keyword` route.

use leptos::*;
use leptos_router::*;
use storefront::pages::catalog::{SECTION_TITLE, WELCOME_TITLE};
use storefront::{CatalogContent, HomePage, QueryState, Route as AppRoute, StoreApi};

use crate::components::{Header, Loader, MessageBanner, ProductTile};
use crate::state::GlobalState;

/// Home / search results page
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let pathname = use_location().pathname;

    // Keyword as decoded from the current path
    let keyword = move || {
        pathname.with(|path| {
            AppRoute::parse(path)
                .and_then(|route| HomePage::for_route(&route))
                .and_then(|page| page.keyword().map(str::to_string))
        })
    };

    let api = state.api.clone();
    let products = create_local_resource(keyword, move |keyword| {
        let api = api.clone();
        async move { QueryState::from(api.search_products(keyword.as_deref()).await) }
    });

    let content = Signal::derive(move || {
        products
            .with(storefront::pages::catalog_content)
            .unwrap_or(CatalogContent::Loading)
    });

    view! {
        <Show when=move || keyword().is_none()>
            <Header />
        </Show>

        <div class="container mx-auto px-4">
            <div class="text-center mt-10 mb-5">
                <h1 class="text-4xl font-bold">{WELCOME_TITLE}</h1>
            </div>

            <div class="flex justify-between items-center mt-10">
                <h1 class="text-3xl font-bold">{SECTION_TITLE}</h1>
                <A
                    href=AppRoute::Shop.path()
                    class="bg-pink-600 text-white font-bold rounded-full py-2 px-10"
                >
                    "Shop"
                </A>
            </div>

            <CatalogGrid content=content />
        </div>
    }
}

/// Loader, banner or card grid for a catalog query
#[component]
pub fn CatalogGrid(content: Signal<CatalogContent>) -> impl IntoView {
    move || match content.get() {
        CatalogContent::Loading => view! { <Loader /> }.into_view(),
        CatalogContent::Error(message) | CatalogContent::Empty(message) => view! {
            <div class="mt-4">
                <MessageBanner message=message />
            </div>
        }
        .into_view(),
        CatalogContent::Grid(cards) => view! {
            <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-4 mt-4">
                {cards
                    .into_iter()
                    .map(|card| view! {
                        <div class="flex justify-center">
                            <ProductTile card=card />
                        </div>
                    })
                    .collect_view()}
            </div>
        }
        .into_view(),
    }
}

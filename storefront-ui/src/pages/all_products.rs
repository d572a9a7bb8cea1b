//! All Products Page
//!
//! Admin list of every product, each card linking to its edit page.

use leptos::*;
use storefront::pages::product_list::LOADING_TEXT;
use storefront::{ProductListView, QueryState, StoreApi};

use crate::components::{AdminMenu, AdminProductCard};
use crate::state::GlobalState;

#[component]
pub fn AllProducts() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let api = state.api.clone();
    let products = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { QueryState::from(api.all_products().await) }
        },
    );

    let list = move || {
        match products.with(storefront::pages::list_view).unwrap_or(ProductListView::Loading) {
            ProductListView::Loading => view! {
                <div class="text-center py-10">{LOADING_TEXT}</div>
            }
            .into_view(),
            ProductListView::Error(text) => view! {
                <div class="text-center py-10 text-red-500">{text}</div>
            }
            .into_view(),
            ProductListView::Loaded { heading, cards } => view! {
                <div class="mb-6">
                    <h1 class="text-2xl font-bold text-gray-800">{heading}</h1>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {cards
                        .into_iter()
                        .map(|card| view! { <AdminProductCard card=card /> })
                        .collect_view()}
                </div>
            }
            .into_view(),
        }
    };

    view! {
        <div class="container mx-auto px-4 md:px-8">
            <div class="flex flex-col md:flex-row">
                <div class="w-full md:w-3/4 p-3">{list}</div>

                <div class="md:w-1/4 p-3 mt-6 md:mt-0">
                    <AdminMenu />
                </div>
            </div>
        </div>
    }
}

//! Product Card Components
//!
//! Catalog tile and the admin card linking to the edit page.

use leptos::*;
use leptos_router::*;
use storefront::ProductCard;

/// Catalog grid tile
#[component]
pub fn ProductTile(card: ProductCard) -> impl IntoView {
    view! {
        <div class="w-full max-w-xs bg-gray-900 text-white rounded-lg shadow overflow-hidden">
            <img src=card.image alt=card.name.clone() class="w-full h-48 object-cover" />
            <div class="p-4">
                <h5 class="text-lg font-semibold truncate">{card.name}</h5>
                <p class="text-pink-400 font-bold mt-2">{card.price_label}</p>
            </div>
        </div>
    }
}

/// Admin list card; the whole card links to the product's edit page
#[component]
pub fn AdminProductCard(card: ProductCard) -> impl IntoView {
    view! {
        <A
            href=card.edit_route.path()
            class="block bg-white shadow-lg hover:shadow-2xl rounded-lg overflow-hidden
                   transition-all duration-300 transform hover:-translate-y-1"
        >
            <img src=card.image alt=card.name.clone() class="w-full h-56 object-cover" />
            <div class="p-4">
                <h5 class="text-lg font-bold text-gray-900 mb-2">{card.name}</h5>
                <p class="text-gray-500 text-sm mb-4">{card.excerpt}</p>

                <div class="flex justify-between items-center">
                    <p class="text-gray-700 font-semibold">{card.price_label}</p>
                    <span class="text-white bg-pink-600 hover:bg-pink-700 font-medium rounded-lg
                                 text-sm px-3 py-2 inline-flex items-center">
                        "Update Product"
                    </span>
                </div>
                <p class="text-gray-400 text-xs mt-2">{card.created_label}</p>
            </div>
        </A>
    }
}

//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;
use storefront::Route as AppRoute;

use crate::components::{Nav, Toast};
use crate::pages::{AllProducts, Home, ProductUpdate, Shop};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-100 flex flex-col">
                <Nav />

                <main class="flex-1 pb-12">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/search/:keyword" view=Home />
                        <Route path="/shop" view=Shop />
                        <Route path="/admin/allproductslist" view=AllProducts />
                        <Route path="/admin/product/update/:id" view=ProductUpdate />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=AppRoute::Home.path()
                class="px-6 py-3 bg-pink-600 hover:bg-pink-700 text-white rounded-lg font-medium transition-colors"
            >
                "Go to Home"
            </A>
        </div>
    }
}

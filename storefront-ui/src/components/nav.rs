//! Navigation Components
//!
//! Header bar with search, the admin side menu and the home page hero.

use leptos::*;
use leptos_router::*;
use storefront::Route as AppRoute;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let (keyword, set_keyword) = create_signal(String::new());
    let navigate = use_navigate();

    let on_search = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        navigate(&search_path(&keyword.get_untracked()), Default::default());
    };

    view! {
        <nav class="bg-gray-900 border-b border-gray-800">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href=AppRoute::Home.path() class="text-xl font-bold text-white">
                        "E-Commerce"
                    </A>

                    <form on:submit=on_search class="flex-1 max-w-md mx-6">
                        <input
                            type="search"
                            placeholder="Search products..."
                            prop:value=move || keyword.get()
                            on:input=move |ev| set_keyword.set(event_target_value(&ev))
                            class="w-full bg-gray-800 text-white rounded-lg px-4 py-2
                                   border border-gray-700 focus:border-pink-500 focus:outline-none"
                        />
                    </form>

                    <div class="flex items-center space-x-1">
                        <NavLink href=AppRoute::Home.path() label="Home" />
                        <NavLink href=AppRoute::Shop.path() label="Shop" />
                        <NavLink href=AppRoute::AllProducts.path() label="Admin" />
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavLink(href: String, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-800 transition-colors"
            active_class="bg-gray-800 text-white"
        >
            {label}
        </A>
    }
}

/// Admin side menu
#[component]
pub fn AdminMenu() -> impl IntoView {
    view! {
        <aside class="bg-gray-900 text-white rounded-lg p-4 space-y-2">
            <h3 class="font-semibold text-gray-400 uppercase text-xs">"Admin"</h3>
            <A href=AppRoute::AllProducts.path() class="block px-3 py-2 rounded hover:bg-gray-800">
                "All Products"
            </A>
            <A href=AppRoute::Shop.path() class="block px-3 py-2 rounded hover:bg-gray-800">
                "Shop"
            </A>
        </aside>
    }
}

/// Hero banner shown on the unfiltered home page
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-gradient-to-r from-pink-600 to-purple-700 text-white py-16">
            <div class="container mx-auto px-4 text-center">
                <h2 class="text-4xl font-bold mb-4">"New arrivals every week"</h2>
                <A
                    href=AppRoute::Shop.path()
                    class="inline-block bg-white text-pink-600 font-bold rounded-full py-2 px-10"
                >
                    "Shop now"
                </A>
            </div>
        </header>
    }
}

/// Search route for a keyword; a blank keyword goes home
fn search_path(keyword: &str) -> String {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        AppRoute::Home.path()
    } else {
        AppRoute::Search {
            keyword: keyword.to_string(),
        }
        .path()
    }
}

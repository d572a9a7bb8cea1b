//! Storefront UI
//!
//! Catalog and product admin pages built with Leptos (WASM).
//!
//! # Features
//!
//! - Catalog home with keyword search
//! - Admin product list
//! - Update / delete product form with image upload
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Page state machines and view models come from the
//! `storefront` core crate; this crate renders them and talks to the backend
//! over `fetch`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

#[cfg(test)]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}

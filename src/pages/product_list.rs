//! All Products page
//!
//! Admin grid of every product, each card linking to its edit page.

use crate::api::StoreApi;
use crate::models::Product;
use crate::pages::QueryState;
use crate::view::{product_cards, ProductCard};

pub const LOADING_TEXT: &str = "Loading...";
pub const ERROR_TEXT: &str = "Error loading products";

/// What the page renders
#[derive(Debug, Clone, PartialEq)]
pub enum ProductListView {
    Loading,
    Error(String),
    Loaded {
        heading: String,
        cards: Vec<ProductCard>,
    },
}

/// Admin product list
#[derive(Debug, Default)]
pub struct AllProductsPage {
    state: QueryState<Vec<Product>>,
}

impl AllProductsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &QueryState<Vec<Product>> {
        &self.state
    }

    /// Fetch on mount
    pub async fn load<A: StoreApi + ?Sized>(&mut self, api: &A) {
        self.state = api.all_products().await.into();
    }

    pub fn view(&self) -> ProductListView {
        list_view(&self.state)
    }
}

/// Render branch for a product list query
pub fn list_view(state: &QueryState<Vec<Product>>) -> ProductListView {
    match state {
        QueryState::Loading => ProductListView::Loading,
        QueryState::Failed(_) => ProductListView::Error(ERROR_TEXT.to_string()),
        QueryState::Loaded(products) => ProductListView::Loaded {
            heading: format!("All Products ({})", products.len()),
            cards: product_cards(products),
        },
    }
}

//! Home / catalog page
//!
//! Fetches the products matching an optional keyword and renders a grid, an
//! empty-result notice or an error banner.

use crate::api::StoreApi;
use crate::models::ProductPage;
use crate::pages::QueryState;
use crate::routes::Route;
use crate::view::{product_cards, Message, ProductCard};

pub const WELCOME_TITLE: &str = "Welcome to E-Commerce";
pub const SECTION_TITLE: &str = "Special Products";
pub const EMPTY_TEXT: &str = "No products found.";
pub const GENERIC_ERROR_TEXT: &str = "An error occurred. Please try again later.";

/// Render branch of the catalog grid
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogContent {
    Loading,
    Error(Message),
    Empty(Message),
    Grid(Vec<ProductCard>),
}

/// Catalog home page, optionally narrowed by a search keyword
#[derive(Debug, Default)]
pub struct HomePage {
    keyword: Option<String>,
    state: QueryState<ProductPage>,
}

impl HomePage {
    pub fn new(keyword: Option<String>) -> Self {
        Self {
            keyword: keyword.filter(|k| !k.trim().is_empty()),
            state: QueryState::Loading,
        }
    }

    /// Build the page for a route; `None` for non-catalog routes
    pub fn for_route(route: &Route) -> Option<Self> {
        match route {
            Route::Home => Some(Self::new(None)),
            Route::Search { keyword } => Some(Self::new(Some(keyword.clone()))),
            _ => None,
        }
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    pub fn state(&self) -> &QueryState<ProductPage> {
        &self.state
    }

    /// The hero header is only shown on the unfiltered home page
    pub fn show_header(&self) -> bool {
        self.keyword.is_none()
    }

    /// Fetch on mount
    pub async fn load<A: StoreApi + ?Sized>(&mut self, api: &A) {
        self.state = api.search_products(self.keyword.as_deref()).await.into();
    }

    pub fn content(&self) -> CatalogContent {
        catalog_content(&self.state)
    }
}

/// Render branch for a catalog query
pub fn catalog_content(state: &QueryState<ProductPage>) -> CatalogContent {
    match state {
        QueryState::Loading => CatalogContent::Loading,
        QueryState::Failed(_) => CatalogContent::Error(Message::danger(GENERIC_ERROR_TEXT)),
        QueryState::Loaded(page) if page.products.is_empty() => {
            CatalogContent::Empty(Message::info(EMPTY_TEXT))
        }
        QueryState::Loaded(page) => CatalogContent::Grid(product_cards(&page.products)),
    }
}

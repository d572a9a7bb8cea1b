//! # Storefront
//!
//! Typed core of the storefront admin and catalog UI: the backend data model,
//! the remote data layer, view models and the page state machines shared by
//! the admin CLI and the Leptos browser app.
//!
//! ## Modules
//!
//! - [`models`]: Products, categories and mutation results as the backend sends them
//! - [`draft`]: The editable product form draft
//! - [`api`]: One trait method per backend endpoint, plus the `reqwest` client
//! - [`view`]: Product cards, message banners and toast notices
//! - [`pages`]: Home/catalog, product list and product edit controllers
//! - [`routes`]: Navigation targets
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use storefront::api::{ClientConfig, HttpStoreApi};
//! use storefront::draft::DraftField;
//! use storefront::pages::{EditOutcome, ProductEditPage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpStoreApi::new(ClientConfig::default())?;
//!
//!     let mut page = ProductEditPage::new("65f1c0ffee");
//!     page.load(&api).await;
//!     page.edit(DraftField::Price, "1499")?;
//!
//!     if let EditOutcome::Navigate(route) = page.submit(&api).await? {
//!         println!("saved, back to {}", route);
//!     }
//!     for notice in page.take_notices() {
//!         println!("{}", notice.text);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod draft;
pub mod models;
pub mod pages;
pub mod routes;
pub mod view;

// Re-export top-level types for convenience
pub use api::{ApiError, ApiResult, StoreApi};

#[cfg(feature = "http-client")]
pub use api::{ClientConfig, HttpStoreApi};

pub use config::{ApiConfig, Config, ConfigError, LoggingConfig};

pub use draft::{DraftError, DraftField, ProductDraft, ProductUpdate};

pub use models::{
    Category, CategoryRef, DeletedProduct, ImageUpload, Product, ProductPage, UploadResponse,
};

pub use pages::{
    AllProductsPage, CatalogContent, EditError, EditOutcome, EditState, HomePage,
    ProductEditPage, ProductListView, QueryState,
};

pub use routes::Route;

pub use view::{Message, MessageVariant, Notice, NoticeLevel, ProductCard};

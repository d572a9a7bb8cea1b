//! Storefront Remote Data Layer
//!
//! Typed queries and mutations against the storefront backend. Every endpoint
//! issues exactly one HTTP request and returns an [`ApiResult`].
//!
//! # Endpoints
//!
//! ## Queries
//! - `GET /api/products/allproducts` - All products
//! - `GET /api/products?keyword=` - Keyword search
//! - `GET /api/products/:id` - Single product, category populated
//! - `GET /api/category/categories` - All categories
//!
//! ## Mutations
//! - `PUT /api/products/:id` - Update a product
//! - `DELETE /api/products/:id` - Delete a product
//! - `POST /api/upload` - Upload a product image (multipart)
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront::api::{ClientConfig, HttpStoreApi, StoreApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpStoreApi::new(ClientConfig::default())?;
//!     let products = api.all_products().await?;
//!     println!("{} products", products.len());
//!     Ok(())
//! }
//! ```

pub mod endpoints;
pub mod error;

#[cfg(feature = "http-client")]
mod client;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{error_message, ApiError, ApiResult};

#[cfg(feature = "http-client")]
pub use client::{ClientConfig, HttpStoreApi};

use async_trait::async_trait;

use crate::draft::ProductUpdate;
use crate::models::{Category, DeletedProduct, ImageUpload, Product, ProductPage, UploadResponse};

/// One method per backend endpoint
///
/// Futures are not `Send` so browser clients built on `fetch` can implement
/// the trait too.
#[async_trait(?Send)]
pub trait StoreApi {
    /// All products, for the admin list
    async fn all_products(&self) -> ApiResult<Vec<Product>>;

    /// Products matching an optional keyword, for the catalog
    async fn search_products(&self, keyword: Option<&str>) -> ApiResult<ProductPage>;

    /// A single product with its category populated
    async fn product(&self, id: &str) -> ApiResult<Product>;

    async fn categories(&self) -> ApiResult<Vec<Category>>;

    async fn update_product(&self, id: &str, update: &ProductUpdate) -> ApiResult<Product>;

    async fn delete_product(&self, id: &str) -> ApiResult<DeletedProduct>;

    /// Store an image and return its path
    async fn upload_image(&self, upload: ImageUpload) -> ApiResult<UploadResponse>;
}

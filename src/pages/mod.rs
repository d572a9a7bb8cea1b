//! Pages
//!
//! Page controllers composing queries, mutations and view models. Front ends
//! (the admin CLI and the browser app) render whatever these expose.

pub mod catalog;
pub mod product_edit;
pub mod product_list;
mod query;

pub use catalog::{catalog_content, CatalogContent, HomePage};
pub use product_edit::{EditError, EditOutcome, EditState, ProductEditPage};
pub use product_list::{list_view, AllProductsPage, ProductListView};
pub use query::QueryState;

//! Pages
//!
//! Top-level page components for each route.

pub mod all_products;
pub mod home;
pub mod product_update;
pub mod shop;

pub use all_products::AllProducts;
pub use home::Home;
pub use product_update::ProductUpdate;
pub use shop::Shop;

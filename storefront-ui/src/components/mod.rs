//! UI Components
//!
//! Presentational Leptos components. They render from passed-in data and
//! never fetch.

pub mod loading;
pub mod message;
pub mod nav;
pub mod product_card;
pub mod toast;

pub use loading::Loader;
pub use message::MessageBanner;
pub use nav::{AdminMenu, Header, Nav};
pub use product_card::{AdminProductCard, ProductTile};
pub use toast::Toast;

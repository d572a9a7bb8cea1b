//! Backend endpoint paths
//!
//! Paths are relative to the configured base URL and shared by every client.

pub const PRODUCTS: &str = "/api/products";
pub const ALL_PRODUCTS: &str = "/api/products/allproducts";
pub const CATEGORIES: &str = "/api/category/categories";
pub const UPLOAD: &str = "/api/upload";

/// Multipart field carrying the uploaded file
pub const UPLOAD_FIELD: &str = "image";

/// `GET /api/products?keyword=...`
pub fn search_products(keyword: Option<&str>) -> String {
    match keyword.map(str::trim).filter(|k| !k.is_empty()) {
        Some(keyword) => format!("{}?keyword={}", PRODUCTS, urlencoding::encode(keyword)),
        None => PRODUCTS.to_string(),
    }
}

/// `GET | PUT | DELETE /api/products/{id}`
pub fn product(id: &str) -> String {
    format!("{}/{}", PRODUCTS, urlencoding::encode(id))
}

/// Join a base URL and an endpoint path
pub fn url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

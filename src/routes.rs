//! Application routes
//!
//! Paths shared by the browser router and the links rendered in views.

use std::fmt;

/// Every page the storefront can navigate to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Search { keyword: String },
    Shop,
    AllProducts,
    ProductUpdate { id: String },
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Search { keyword } => format!("/search/{}", urlencoding::encode(keyword)),
            Route::Shop => "/shop".to_string(),
            Route::AllProducts => "/admin/allproductslist".to_string(),
            Route::ProductUpdate { id } => {
                format!("/admin/product/update/{}", urlencoding::encode(id))
            }
        }
    }

    /// Resolve a path back into a route
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Home),
            ["shop"] => Some(Route::Shop),
            ["search", keyword] => Some(Route::Search {
                keyword: decode(keyword)?,
            }),
            ["admin", "allproductslist"] => Some(Route::AllProducts),
            ["admin", "product", "update", id] => Some(Route::ProductUpdate { id: decode(id)? }),
            _ => None,
        }
    }

    pub fn product_update(id: impl Into<String>) -> Self {
        Route::ProductUpdate { id: id.into() }
    }
}

fn decode(segment: &str) -> Option<String> {
    urlencoding::decode(segment).ok().map(|s| s.into_owned())
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::AllProducts.path(), "/admin/allproductslist");
        assert_eq!(Route::product_update("65ab").path(), "/admin/product/update/65ab");
        assert_eq!(
            Route::Search { keyword: "red shoes".to_string() }.path(),
            "/search/red%20shoes"
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/shop/"), Some(Route::Shop));
        assert_eq!(
            Route::parse("/admin/product/update/65ab?tab=1"),
            Some(Route::product_update("65ab"))
        );
        assert_eq!(
            Route::parse("/search/red%20shoes"),
            Some(Route::Search { keyword: "red shoes".to_string() })
        );
        assert_eq!(Route::parse("/admin/orders"), None);
    }
}

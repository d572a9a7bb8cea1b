//! Catalog data types
//!
//! Wire shapes returned by the storefront backend:
//! - `Product`: a sellable catalog item
//! - `Category`: a classification label, embedded in products or listed on its own
//! - `ProductPage`: keyword search response
//! - `UploadResponse` / `DeletedProduct`: mutation results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog product as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend document id
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    /// Either the populated category or its bare id
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub count_in_stock: u32,
    /// Stored image path or absolute URL
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_reviews: Option<u32>,
}

impl Product {
    /// Create a product with the required fields, everything else empty
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            category: None,
            quantity: 0,
            brand: String::new(),
            count_in_stock: 0,
            image: String::new(),
            created_at: None,
            rating: None,
            num_reviews: None,
        }
    }

    /// Builder method: set description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder method: set brand
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Builder method: set quantity
    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Builder method: set stock count
    pub fn stock(mut self, count_in_stock: u32) -> Self {
        self.count_in_stock = count_in_stock;
        self
    }

    /// Builder method: embed a category
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(CategoryRef::Embedded(category));
        self
    }

    /// Builder method: set image path
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Builder method: set creation time
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Id of the product's category, whichever shape the backend sent
    pub fn category_id(&self) -> Option<&str> {
        self.category.as_ref().map(CategoryRef::id)
    }
}

/// A product category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Category reference inside a product
///
/// Product-by-id responses populate the category; list responses may carry
/// only its id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CategoryRef {
    Embedded(Category),
    Id(String),
}

impl CategoryRef {
    pub fn id(&self) -> &str {
        match self {
            CategoryRef::Embedded(category) => &category.id,
            CategoryRef::Id(id) => id,
        }
    }
}

/// Keyword search response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub products: Vec<Product>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub has_more: bool,
}

/// Image upload response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: String,
    /// Stored image path
    pub image: String,
}

/// Summary of a deleted product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeletedProduct {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Delete response body
///
/// The backend answers either with the summary itself or wrapped in `data`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DeleteResponse {
    Wrapped { data: DeletedProduct },
    Bare(DeletedProduct),
}

impl From<DeleteResponse> for DeletedProduct {
    fn from(response: DeleteResponse) -> Self {
        match response {
            DeleteResponse::Wrapped { data } => data,
            DeleteResponse::Bare(product) => product,
        }
    }
}

/// A file picked for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Guess the MIME type from a file name extension
    pub fn content_type_for(file_name: &str) -> &'static str {
        let ext = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "webp" => "image/webp",
            "gif" => "image/gif",
            _ => "application/octet-stream",
        }
    }
}

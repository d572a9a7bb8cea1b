//! Product form draft
//!
//! The editable copy of a product held by the edit page. Seeded from the
//! fetched product, then edited field by field from text inputs until it is
//! turned into an update request.

use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;

use crate::models::Product;

/// Editable product fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDraft {
    /// Image path or URL, never a local file handle
    pub image: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Selected category id
    pub category: Option<String>,
    pub quantity: u32,
    pub brand: String,
    /// Count in stock
    pub stock: u32,
}

/// Form field names, as used by inputs and the CLI `--set` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Image,
    Name,
    Description,
    Price,
    Category,
    Quantity,
    Brand,
    Stock,
}

impl DraftField {
    pub fn all() -> &'static [DraftField] {
        &[
            DraftField::Name,
            DraftField::Price,
            DraftField::Quantity,
            DraftField::Brand,
            DraftField::Description,
            DraftField::Stock,
            DraftField::Category,
            DraftField::Image,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Image => "image",
            DraftField::Name => "name",
            DraftField::Description => "description",
            DraftField::Price => "price",
            DraftField::Category => "category",
            DraftField::Quantity => "quantity",
            DraftField::Brand => "brand",
            DraftField::Stock => "stock",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, DraftField::Price | DraftField::Quantity | DraftField::Stock)
    }

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Image => "Image",
            DraftField::Name => "Name",
            DraftField::Description => "Description",
            DraftField::Price => "Price",
            DraftField::Category => "Category",
            DraftField::Quantity => "Quantity",
            DraftField::Brand => "Brand",
            DraftField::Stock => "Count In Stock",
        }
    }
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DraftField {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "image" => Ok(DraftField::Image),
            "name" => Ok(DraftField::Name),
            "description" => Ok(DraftField::Description),
            "price" => Ok(DraftField::Price),
            "category" => Ok(DraftField::Category),
            "quantity" => Ok(DraftField::Quantity),
            "brand" => Ok(DraftField::Brand),
            "stock" | "countinstock" => Ok(DraftField::Stock),
            other => Err(DraftError::UnknownField(other.to_string())),
        }
    }
}

/// Draft editing errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DraftError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid {field}: {value:?} is not a valid number")]
    InvalidNumber { field: DraftField, value: String },

    #[error("Invalid price: must be zero or more")]
    NegativePrice,
}

impl ProductDraft {
    /// Seed a draft from a fetched product
    pub fn from_product(product: &Product) -> Self {
        Self {
            image: product.image.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            category: product.category_id().map(str::to_string),
            quantity: product.quantity,
            brand: product.brand.clone(),
            stock: product.count_in_stock,
        }
    }

    /// Current value of a field as input text
    pub fn get(&self, field: DraftField) -> String {
        match field {
            DraftField::Image => self.image.clone(),
            DraftField::Name => self.name.clone(),
            DraftField::Description => self.description.clone(),
            DraftField::Price => self.price.to_string(),
            DraftField::Category => self.category.clone().unwrap_or_default(),
            DraftField::Quantity => self.quantity.to_string(),
            DraftField::Brand => self.brand.clone(),
            DraftField::Stock => self.stock.to_string(),
        }
    }

    /// Apply input text to a field
    ///
    /// Numeric fields are parsed; on error the draft is left untouched. A
    /// blank numeric input keeps the current value.
    pub fn set(&mut self, field: DraftField, value: &str) -> Result<(), DraftError> {
        if field.is_numeric() && value.trim().is_empty() {
            return Ok(());
        }

        match field {
            DraftField::Image => self.image = value.to_string(),
            DraftField::Name => self.name = value.to_string(),
            DraftField::Description => self.description = value.to_string(),
            DraftField::Brand => self.brand = value.to_string(),
            DraftField::Category => {
                let value = value.trim();
                self.category = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            DraftField::Price => {
                let price: f64 = parse_number(field, value)?;
                if !price.is_finite() {
                    return Err(DraftError::InvalidNumber {
                        field,
                        value: value.to_string(),
                    });
                }
                if price < 0.0 {
                    return Err(DraftError::NegativePrice);
                }
                self.price = price;
            }
            DraftField::Quantity => self.quantity = parse_number(field, value)?,
            DraftField::Stock => self.stock = parse_number(field, value)?,
        }
        Ok(())
    }

    /// Replace only the image path
    pub fn apply_image(&mut self, image: impl Into<String>) {
        self.image = image.into();
    }

    /// Build the update request body
    pub fn to_update(&self) -> ProductUpdate {
        ProductUpdate {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            category: self.category.clone(),
            quantity: self.quantity,
            brand: self.brand.clone(),
            count_in_stock: self.stock,
            image: self.image.clone(),
        }
    }
}

fn parse_number<T: FromStr>(field: DraftField, value: &str) -> Result<T, DraftError> {
    value.trim().parse().map_err(|_| DraftError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Update request body
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub quantity: u32,
    pub brand: String,
    pub count_in_stock: u32,
    pub image: String,
}

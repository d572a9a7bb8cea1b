//! View models
//!
//! Presentational data for the product card, message banner and toast
//! notices. Built from already-fetched data; nothing here performs requests.

use chrono::{DateTime, Datelike, Local, TimeZone, Utc};
use std::fmt::Display;
use std::time::Duration;

use crate::models::Product;
use crate::routes::Route;

/// Characters of description shown on a card
pub const EXCERPT_CHARS: usize = 160;

/// How long a notice stays on screen
pub const NOTICE_AUTO_CLOSE: Duration = Duration::from_millis(2000);

/// Everything a product card renders
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub image: String,
    pub excerpt: String,
    pub price_label: String,
    /// Empty when the backend sent no creation time
    pub created_label: String,
    pub edit_route: Route,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            excerpt: excerpt(&product.description),
            price_label: format_price(product.price),
            created_label: product
                .created_at
                .as_ref()
                .map(format_created)
                .unwrap_or_default(),
            edit_route: Route::product_update(product.id.clone()),
        }
    }
}

/// One card per product, in response order
pub fn product_cards(products: &[Product]) -> Vec<ProductCard> {
    products.iter().map(ProductCard::from_product).collect()
}

/// First [`EXCERPT_CHARS`] characters followed by an ellipsis
pub fn excerpt(description: &str) -> String {
    let head: String = description.chars().take(EXCERPT_CHARS).collect();
    format!("{}...", head)
}

pub fn format_price(price: f64) -> String {
    format!("₹ {}", price)
}

/// Creation date in the viewer's local time zone
pub fn format_created(created_at: &DateTime<Utc>) -> String {
    format_date(&created_at.with_timezone(&Local))
}

/// `MMMM Do YYYY`, e.g. "October 19th 2026"
pub fn format_date<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let day = date.day();
    format!("{} {}{} {}", date.format("%B"), day, ordinal_suffix(day), date.year())
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Message banner style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageVariant {
    Info,
    Success,
    Danger,
}

impl MessageVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageVariant::Info => "info",
            MessageVariant::Success => "success",
            MessageVariant::Danger => "danger",
        }
    }
}

/// Inline message banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub variant: MessageVariant,
    pub text: String,
}

impl Message {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            variant: MessageVariant::Info,
            text: text.into(),
        }
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self {
            variant: MessageVariant::Danger,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

/// Transient, dismissable notice (toast)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
    pub auto_close: Duration,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, text)
    }

    fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            auto_close: NOTICE_AUTO_CLOSE,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

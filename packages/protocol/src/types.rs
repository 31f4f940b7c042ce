//! Request and response bodies for `POST /scrape`

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Request
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeRequest {
    pub url: String,
}

impl ScrapeRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

// ============================================================================
// Response
// ============================================================================

/// Body of every `/scrape` response.
///
/// Success carries `products` (and `csv_file` once the server builds one),
/// failure carries `error`. Absent fields are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapeResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,

    /// Raw CSV text of the same products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csv_file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScrapeResponse {
    pub fn success(products: Vec<Product>, csv_file: Option<String>) -> Self {
        Self {
            products: Some(products),
            csv_file,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }
}

// ============================================================================
// Product
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: DisplayValue,
    pub rating: DisplayValue,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<DisplayValue>,
        rating: impl Into<DisplayValue>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            rating: rating.into(),
        }
    }
}

/// A product attribute as sent over the wire: either a string or a JSON number.
///
/// Anything else (null, bool, object, array) is rejected at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayValue {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Text(s) => f.write_str(s),
            DisplayValue::Number(n) => f.write_str(&format_number(n)),
        }
    }
}

/// Browser number formatting: integral values print without a fraction
/// (`1.0` shows as `1`) and negative zero shows as `0`.
fn format_number(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(v) if v == 0.0 => "0".to_string(),
        Some(v) if v.fract() == 0.0 && v.abs() < 1e21 => format!("{:.0}", v),
        Some(v) => v.to_string(),
        None => n.to_string(),
    }
}

impl From<String> for DisplayValue {
    fn from(value: String) -> Self {
        DisplayValue::Text(value)
    }
}

impl From<&str> for DisplayValue {
    fn from(value: &str) -> Self {
        DisplayValue::Text(value.to_string())
    }
}

impl From<i64> for DisplayValue {
    fn from(value: i64) -> Self {
        DisplayValue::Number(value.into())
    }
}

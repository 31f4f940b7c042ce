//! Product extraction from listing HTML
//!
//! Each element matching the item selector becomes one product. Name, price
//! and rating come from the first match of their selector inside the item;
//! a missing element falls back to a placeholder.

use anyhow::{anyhow, Result};
use scraper::{ElementRef, Html, Selector};
use scrape_protocol::Product;

pub const NO_NAME: &str = "No Name";
pub const NO_PRICE: &str = "N/A";
pub const NO_RATING: &str = "No Rating";

/// Search result rows on an Amazon listing page
pub const DEFAULT_ITEM_SELECTOR: &str = ".s-result-item";
const DEFAULT_NAME_SELECTOR: &str = "h2 a span";
const DEFAULT_PRICE_SELECTOR: &str = ".a-price-whole";
const DEFAULT_RATING_SELECTOR: &str = ".a-icon-alt";

/// Compiled CSS selectors for one storefront layout
#[derive(Debug, Clone)]
pub struct ProductSelectors {
    item: Selector,
    name: Selector,
    price: Selector,
    rating: Selector,
}

impl ProductSelectors {
    pub fn new(item: &str, name: &str, price: &str, rating: &str) -> Result<Self> {
        Ok(Self {
            item: parse_selector(item)?,
            name: parse_selector(name)?,
            price: parse_selector(price)?,
            rating: parse_selector(rating)?,
        })
    }

    /// Default layout with a different item selector
    pub fn with_item(item: &str) -> Result<Self> {
        Self::new(
            item,
            DEFAULT_NAME_SELECTOR,
            DEFAULT_PRICE_SELECTOR,
            DEFAULT_RATING_SELECTOR,
        )
    }
}

impl Default for ProductSelectors {
    fn default() -> Self {
        Self::with_item(DEFAULT_ITEM_SELECTOR).expect("default selectors are valid CSS")
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("Invalid CSS selector {:?}: {}", css, e))
}

/// Extract every product on the page, in document order
pub fn extract_products(html: &str, selectors: &ProductSelectors) -> Vec<Product> {
    let document = Html::parse_document(html);

    document
        .select(&selectors.item)
        .map(|item| {
            Product::new(
                first_text(&item, &selectors.name).unwrap_or_else(|| NO_NAME.to_string()),
                first_text(&item, &selectors.price).unwrap_or_else(|| NO_PRICE.to_string()),
                first_text(&item, &selectors.rating).unwrap_or_else(|| NO_RATING.to_string()),
            )
        })
        .collect()
}

/// Text of the first match: each text node trimmed, empty ones dropped, joined
fn first_text(item: &ElementRef<'_>, selector: &Selector) -> Option<String> {
    item.select(selector).next().map(|el| {
        el.text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<String>()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"
        <html><body>
          <div class="s-main-slot">
            <div class="s-result-item">
              <h2><a href="/lamp"><span> Desk Lamp  </span></a></h2>
              <span class="a-price"><span class="a-price-whole">24<span class="a-price-decimal">.</span></span></span>
              <i class="a-icon-star"><span class="a-icon-alt">4.6 out of 5 stars</span></i>
            </div>
            <div class="s-result-item">
              <h2><a href="/floor"><span>Floor Lamp</span></a></h2>
            </div>
            <div class="s-result-item"></div>
          </div>
        </body></html>
    "#;

    #[test]
    fn test_extracts_each_item_in_order() {
        let products = extract_products(LISTING, &ProductSelectors::default());
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].name, "Desk Lamp");
        assert_eq!(products[0].price.to_string(), "24.");
        assert_eq!(products[0].rating.to_string(), "4.6 out of 5 stars");
    }

    #[test]
    fn test_missing_fields_use_placeholders() {
        let products = extract_products(LISTING, &ProductSelectors::default());
        assert_eq!(products[1].name, "Floor Lamp");
        assert_eq!(products[1].price.to_string(), NO_PRICE);
        assert_eq!(products[1].rating.to_string(), NO_RATING);
        assert_eq!(products[2].name, NO_NAME);
    }

    #[test]
    fn test_no_items_is_empty() {
        let products = extract_products("<html><body><p>Hi</p></body></html>", &ProductSelectors::default());
        assert!(products.is_empty());
    }

    #[test]
    fn test_custom_item_selector() {
        let html = r#"<ul><li class="tile"><h2><a><span>Mug</span></a></h2></li></ul>"#;
        let selectors = ProductSelectors::with_item("li.tile").unwrap();
        let products = extract_products(html, &selectors);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Mug");
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        assert!(ProductSelectors::with_item("div[").is_err());
    }
}

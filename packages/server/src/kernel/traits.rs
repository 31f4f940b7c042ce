//! Trait seams for the server's outbound work.

use async_trait::async_trait;
use scrape_protocol::Product;

use crate::common::ScrapeError;

/// Fetches a page and pulls the product list out of it
#[async_trait]
pub trait ProductScraper: Send + Sync {
    async fn scrape(&self, url: &str) -> Result<Vec<Product>, ScrapeError>;
}

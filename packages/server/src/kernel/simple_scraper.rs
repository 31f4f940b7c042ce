//! Product scraper over plain HTTP + HTML parsing
//!
//! - Uses reqwest for the GET, with a browser-like User-Agent and a timeout
//! - Uses scraper for CSS-selector extraction (see `extract`)
//!
//! No JavaScript rendering; products must be in the served HTML.

use anyhow::{Context, Result};
use async_trait::async_trait;
use scrape_protocol::Product;
use tracing::{debug, info, warn};

use super::extract::{extract_products, ProductSelectors};
use super::ProductScraper;
use crate::common::ScrapeError;
use crate::config::{Config, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

pub struct SimpleScraper {
    client: reqwest::Client,
    selectors: ProductSelectors,
}

impl SimpleScraper {
    pub fn new(client: reqwest::Client, selectors: ProductSelectors) -> Self {
        Self { client, selectors }
    }

    /// Build the HTTP client and selectors from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.scrape_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        let selectors = match &config.item_selector {
            Some(item) => ProductSelectors::with_item(item)
                .context("SCRAPE_ITEM_SELECTOR is not a valid CSS selector")?,
            None => ProductSelectors::default(),
        };

        Ok(Self::new(client, selectors))
    }

    /// Fetch raw HTML; anything but 200 is an error
    async fn fetch_html(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "HTTP request failed");
            ScrapeError::from(e)
        })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            warn!(url = %url, status = %status, "Failed to retrieve data from the URL");
            return Err(ScrapeError::UpstreamStatus(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

impl Default for SimpleScraper {
    fn default() -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .unwrap_or_default();
        Self::new(client, ProductSelectors::default())
    }
}

#[async_trait]
impl ProductScraper for SimpleScraper {
    async fn scrape(&self, url: &str) -> Result<Vec<Product>, ScrapeError> {
        debug!(url = %url, "Scraping page");

        let html = self.fetch_html(url).await?;
        let products = extract_products(&html, &self.selectors);

        info!(url = %url, products = products.len(), "Extracted products");
        Ok(products)
    }
}

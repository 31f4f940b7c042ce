// Mock implementations of the kernel traits for tests

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use scrape_protocol::Product;

use super::ProductScraper;
use crate::common::ScrapeError;

// =============================================================================
// Mock Product Scraper
// =============================================================================

/// Answers from a queue of canned results and records every URL it was asked for.
///
/// When the queue is empty it returns no products.
#[derive(Clone, Default)]
pub struct MockProductScraper {
    responses: Arc<Mutex<VecDeque<Result<Vec<Product>, ScrapeError>>>>,
    scrape_calls: Arc<Mutex<Vec<String>>>,
}

impl MockProductScraper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(self, products: Vec<Product>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(products));
        self
    }

    pub fn with_error(self, error: ScrapeError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// URLs passed to `scrape`, in call order
    pub fn scrape_calls(&self) -> Vec<String> {
        self.scrape_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProductScraper for MockProductScraper {
    async fn scrape(&self, url: &str) -> Result<Vec<Product>, ScrapeError> {
        self.scrape_calls.lock().unwrap().push(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

//! Kernel module - outbound scraping and its test doubles.

pub mod extract;
pub mod simple_scraper;
pub mod test_dependencies;
pub mod traits;

pub use extract::{extract_products, ProductSelectors};
pub use simple_scraper::SimpleScraper;
pub use test_dependencies::MockProductScraper;
pub use traits::*;

//! Application pages

mod scrape;

pub use scrape::*;

// Product scrape server
//
// Serves the scrape page and its JSON endpoint: POST /scrape fetches the
// submitted URL, extracts the product list and returns it with a CSV copy.

pub mod common;
pub mod config;
pub mod kernel;
pub mod server;

pub use config::*;

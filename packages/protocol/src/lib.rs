//! Wire types for the `/scrape` endpoint.
//!
//! Shared by the browser frontend and the server so both sides agree on the
//! JSON shape of requests and responses.

mod types;

pub use types::*;

/// Path of the scrape endpoint, relative to the site origin.
pub const SCRAPE_PATH: &str = "/scrape";

/// File name offered for the CSV download.
pub const CSV_FILE_NAME: &str = "products.csv";

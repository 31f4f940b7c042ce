// Shared building blocks for the scrape endpoint
pub mod csv_export;
pub mod error;

pub use csv_export::*;
pub use error::*;

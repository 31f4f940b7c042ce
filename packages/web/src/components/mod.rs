//! Reusable UI components

mod download_link;
mod loading;
mod product_card;

pub use download_link::*;
pub use loading::*;
pub use product_card::*;

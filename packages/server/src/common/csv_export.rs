//! CSV text for the download link

use scrape_protocol::Product;

use super::error::ScrapeError;

const HEADERS: [&str; 3] = ["Name", "Price", "Rating"];

/// Render products as CSV: a `Name,Price,Rating` header, then one row each.
pub fn products_to_csv(products: &[Product]) -> Result<String, ScrapeError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADERS).map_err(csv_error)?;
    for product in products {
        let price = product.price.to_string();
        let rating = product.rating.to_string();
        writer
            .write_record([product.name.as_str(), price.as_str(), rating.as_str()])
            .map_err(csv_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ScrapeError::Internal(e.into_error().to_string()))?;
    String::from_utf8(bytes).map_err(|e| ScrapeError::Internal(e.to_string()))
}

fn csv_error(err: csv::Error) -> ScrapeError {
    ScrapeError::Internal(err.to_string())
}

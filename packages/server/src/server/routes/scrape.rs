use axum::{extract::rejection::JsonRejection, extract::State, Json};
use scrape_protocol::{ScrapeRequest, ScrapeResponse};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::common::{products_to_csv, ScrapeError};
use crate::server::app::AppState;

/// `POST /scrape`
///
/// Body `{"url": "..."}`. Replies `{"products": [...], "csv_file": "..."}` on
/// success, `{"error": "..."}` with a 4xx/5xx status otherwise.
#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn scrape_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScrapeRequest>, JsonRejection>,
) -> Result<Json<ScrapeResponse>, ScrapeError> {
    let url = match payload {
        Ok(Json(request)) => request.url,
        Err(rejection) => {
            warn!(error = %rejection, "Unreadable scrape request body");
            return Err(ScrapeError::InvalidUrl);
        }
    };

    if !is_http_url(&url) {
        warn!(url = %url, "Invalid URL provided by user");
        return Err(ScrapeError::InvalidUrl);
    }

    let products = state.scraper.scrape(&url).await.map_err(|e| {
        error!(url = %url, error = %e, "Scrape failed");
        e
    })?;

    let csv_file = products_to_csv(&products)?;
    info!(url = %url, products = products.len(), "Successfully scraped products");

    Ok(Json(ScrapeResponse::success(products, Some(csv_file))))
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("http://example.org"));
        assert!(is_http_url("https://example.org/s?k=lamp"));
        assert!(!is_http_url(""));
        assert!(!is_http_url("example.org"));
        assert!(!is_http_url("ftp://example.org"));
        assert!(!is_http_url("HTTPS://example.org"));
    }
}

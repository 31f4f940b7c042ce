//! Form submit handling: validate, POST once, render the reply
//!
//! Split in two synchronous halves around the single network await so the
//! component can flip the loading flag inside the event handler itself, before
//! the request task is spawned. A second submit arriving while the first is in
//! flight sees `loading` already set and is refused.

use scrape_protocol::ScrapeRequest;

use crate::client::{ClientError, ScrapeClient, ScrapeReply};
use crate::download::CsvDownload;
use crate::state::{PageView, Results};
use crate::validation::{validate_url, ValidationError};

pub const NO_PRODUCTS_MESSAGE: &str = "No products found.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";
pub const MISSING_SERVER_ERROR_MESSAGE: &str = "The server did not say what went wrong.";

/// How a submit ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A request was already in flight; nothing was sent
    Busy,
    /// Input rejected before any request
    Invalid(ValidationError),
    /// Success status; `products` blocks rendered
    Rendered { products: usize, downloadable: bool },
    /// Non-2xx status; carries the message shown
    ServerError(String),
    /// Transport or decode failure
    Failed,
}

/// First half of a submit. On `Ok` the loading indicator is showing and the
/// request must be sent, then passed to [`finish_submit`].
pub fn begin_submit<V: PageView>(view: &mut V, input: &str) -> Result<ScrapeRequest, SubmitOutcome> {
    if view.is_loading() {
        tracing::debug!("Submit ignored, a scrape is already in flight");
        return Err(SubmitOutcome::Busy);
    }

    view.update(|state| state.clear());

    match validate_url(input) {
        Ok(url) => {
            view.update(|state| state.loading = true);
            Ok(ScrapeRequest::new(url))
        }
        Err(e) => {
            view.update(|state| state.show_error(e.to_string()));
            Err(SubmitOutcome::Invalid(e))
        }
    }
}

/// Second half of a submit. Hides the loading indicator whatever the result.
pub fn finish_submit<V: PageView>(
    view: &mut V,
    result: Result<ScrapeReply, ClientError>,
) -> SubmitOutcome {
    view.update(|state| state.loading = false);

    let reply = match result {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!(error = %e, "Scrape request failed");
            view.update(|state| state.show_error(UNEXPECTED_ERROR_MESSAGE));
            return SubmitOutcome::Failed;
        }
    };

    if !reply.is_success() {
        let message = format!(
            "Error: {}",
            reply
                .body
                .error
                .as_deref()
                .unwrap_or(MISSING_SERVER_ERROR_MESSAGE)
        );
        tracing::warn!(status = reply.status, message = %message, "Scrape rejected by server");
        view.update(|state| state.show_error(message.clone()));
        return SubmitOutcome::ServerError(message);
    }

    let Some(products) = reply.body.products else {
        tracing::error!(status = reply.status, "Success response without a products list");
        view.update(|state| state.show_error(UNEXPECTED_ERROR_MESSAGE));
        return SubmitOutcome::Failed;
    };

    if products.is_empty() {
        view.update(|state| state.results = Results::Empty);
        return SubmitOutcome::Rendered {
            products: 0,
            downloadable: false,
        };
    }

    let count = products.len();
    let download = reply.body.csv_file.map(CsvDownload::new);
    let downloadable = download.is_some();
    tracing::info!(products = count, downloadable, "Scrape results rendered");

    view.update(|state| {
        state.results = Results::Products(products);
        state.download = download;
    });

    SubmitOutcome::Rendered {
        products: count,
        downloadable,
    }
}

/// Full submit: validate, one request, render.
pub async fn submit<C, V>(client: &C, view: &mut V, input: &str) -> SubmitOutcome
where
    C: ScrapeClient + ?Sized,
    V: PageView,
{
    let request = match begin_submit(view, input) {
        Ok(request) => request,
        Err(outcome) => return outcome,
    };

    let result = client.scrape(&request).await;
    finish_submit(view, result)
}

#[cfg(test)]
mod tests {
    use scrape_protocol::{Product, ScrapeResponse};

    use super::*;
    use crate::state::PageState;

    fn decode_error() -> ClientError {
        ClientError::Decode(serde_json::from_str::<ScrapeResponse>("<html>").unwrap_err())
    }

    #[test]
    fn test_begin_refuses_while_loading() {
        let mut state = PageState {
            loading: true,
            ..PageState::default()
        };
        assert_eq!(
            begin_submit(&mut state, "https://example.org"),
            Err(SubmitOutcome::Busy)
        );
        assert!(state.loading);
    }

    #[test]
    fn test_begin_clears_previous_outcome() {
        let mut state = PageState {
            error: Some("Error: old".into()),
            results: Results::Products(vec![Product::new("Old", "1", "2")]),
            download: Some(CsvDownload::new("Name\nOld\n")),
            ..PageState::default()
        };

        let request = begin_submit(&mut state, " https://example.org ").unwrap();

        assert_eq!(request.url, "https://example.org");
        assert!(state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.results, Results::Idle);
        assert_eq!(state.download, None);
    }

    #[test]
    fn test_begin_invalid_does_not_show_loading() {
        let mut state = PageState::default();
        let outcome = begin_submit(&mut state, "not a url");
        assert_eq!(
            outcome,
            Err(SubmitOutcome::Invalid(ValidationError::Malformed))
        );
        assert!(!state.loading);
        assert_eq!(
            state.error.as_deref(),
            Some("Please enter a valid URL starting with http:// or https://")
        );
    }

    #[test]
    fn test_finish_decode_error_is_generic() {
        let mut state = PageState {
            loading: true,
            ..PageState::default()
        };
        assert_eq!(finish_submit(&mut state, Err(decode_error())), SubmitOutcome::Failed);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some(UNEXPECTED_ERROR_MESSAGE));
    }

    #[test]
    fn test_finish_success_without_products_is_generic() {
        let mut state = PageState {
            loading: true,
            ..PageState::default()
        };
        let reply = ScrapeReply::new(200, ScrapeResponse::default());
        assert_eq!(finish_submit(&mut state, Ok(reply)), SubmitOutcome::Failed);
        assert_eq!(state.error.as_deref(), Some(UNEXPECTED_ERROR_MESSAGE));
        assert_eq!(state.results, Results::Idle);
    }

    #[test]
    fn test_finish_server_error_without_message() {
        let mut state = PageState {
            loading: true,
            ..PageState::default()
        };
        let reply = ScrapeReply::new(502, ScrapeResponse::default());
        let outcome = finish_submit(&mut state, Ok(reply));
        assert_eq!(
            outcome,
            SubmitOutcome::ServerError("Error: The server did not say what went wrong.".into())
        );
        assert!(!state.loading);
    }

    #[test]
    fn test_finish_products_without_csv_has_no_download() {
        let mut state = PageState {
            loading: true,
            ..PageState::default()
        };
        let reply = ScrapeReply::new(
            200,
            ScrapeResponse::success(vec![Product::new("Lamp", "12", "4.5")], None),
        );
        assert_eq!(
            finish_submit(&mut state, Ok(reply)),
            SubmitOutcome::Rendered {
                products: 1,
                downloadable: false
            }
        );
        assert_eq!(state.download, None);
    }
}

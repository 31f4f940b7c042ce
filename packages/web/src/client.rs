//! HTTP client for the scrape endpoint

use std::sync::OnceLock;

use async_trait::async_trait;
use scrape_protocol::{ScrapeRequest, ScrapeResponse, SCRAPE_PATH};

static SCRAPE_ENDPOINT: OnceLock<String> = OnceLock::new();

/// Override the scrape endpoint. Call this at startup, before the first submit.
pub fn init_scrape_endpoint(url: String) {
    SCRAPE_ENDPOINT.set(url).ok();
}

/// Endpoint baked in with `SCRAPE_ENDPOINT` at compile time, if any.
///
/// The browser has no process environment, so this is read by the compiler.
pub fn build_time_endpoint() -> Option<&'static str> {
    non_blank(option_env!("SCRAPE_ENDPOINT"))
}

fn non_blank(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Get the configured scrape endpoint
pub fn scrape_endpoint() -> &'static str {
    SCRAPE_ENDPOINT.get().map(|s| s.as_str()).unwrap_or(SCRAPE_PATH)
}

/// Error type for scrape requests that never produced a usable response
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A decoded response, whatever its status.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeReply {
    pub status: u16,
    pub body: ScrapeResponse,
}

impl ScrapeReply {
    pub fn new(status: u16, body: ScrapeResponse) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport seam between the submit handler and the network.
///
/// Futures are not `Send`: in the browser they run on the single JS thread.
#[async_trait(?Send)]
pub trait ScrapeClient {
    async fn scrape(&self, request: &ScrapeRequest) -> Result<ScrapeReply, ClientError>;
}

/// Client that POSTs JSON to the scrape endpoint
#[derive(Clone)]
pub struct HttpScrapeClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpScrapeClient {
    /// Create a new client for the given absolute endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl ScrapeClient for HttpScrapeClient {
    async fn scrape(&self, request: &ScrapeRequest) -> Result<ScrapeReply, ClientError> {
        tracing::debug!(endpoint = %self.endpoint, url = %request.url, "POST scrape");

        // .json() also sets Content-Type: application/json
        let response = self.client.post(&self.endpoint).json(request).send().await?;
        let status = response.status().as_u16();

        // The body is JSON for errors too, so decode before looking at the status
        let bytes = response.bytes().await?;
        let body: ScrapeResponse = serde_json::from_slice(&bytes)?;

        Ok(ScrapeReply { status, body })
    }
}

/// Create a client for browser requests, resolving the endpoint against the page origin
#[cfg(feature = "web")]
pub fn browser_client() -> HttpScrapeClient {
    let endpoint = scrape_endpoint();
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return HttpScrapeClient::new(endpoint);
    }

    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    HttpScrapeClient::new(format!("{}{}", origin, endpoint))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_is_scrape_path() {
        assert_eq!(scrape_endpoint(), "/scrape");
    }

    #[test]
    fn test_blank_build_time_endpoint_is_ignored() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(
            non_blank(Some(" http://localhost:8080/scrape ")),
            Some("http://localhost:8080/scrape")
        );
    }

    #[test]
    fn test_reply_success_range() {
        let body = ScrapeResponse::default();
        assert!(ScrapeReply::new(200, body.clone()).is_success());
        assert!(ScrapeReply::new(204, body.clone()).is_success());
        assert!(!ScrapeReply::new(400, body.clone()).is_success());
        assert!(!ScrapeReply::new(500, body).is_success());
    }
}

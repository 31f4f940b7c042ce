//! Errors returned by `/scrape`.
//!
//! Every variant renders as `{"error": "<message>"}` with the status from
//! [`ScrapeError::status`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use scrape_protocol::ScrapeResponse;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrapeError {
    /// Missing body, missing `url`, or a URL that is not http(s)
    #[error("Invalid URL. Please provide a valid URL starting with http:// or https://")]
    InvalidUrl,

    /// Target page answered with something other than 200
    #[error("Failed to retrieve data from the URL. Status code: {0}")]
    UpstreamStatus(u16),

    #[error("The request timed out. Please try again later.")]
    Timeout,

    #[error("Failed to connect. Check the URL or your internet connection.")]
    Connect,

    /// Any other outbound request failure
    #[error("An error occurred while making the request: {0}")]
    Request(String),

    #[error("An error occurred: {0}")]
    Internal(String),
}

impl ScrapeError {
    pub fn status(&self) -> StatusCode {
        match self {
            ScrapeError::InvalidUrl | ScrapeError::UpstreamStatus(_) => StatusCode::BAD_REQUEST,
            ScrapeError::Timeout
            | ScrapeError::Connect
            | ScrapeError::Request(_)
            | ScrapeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ScrapeError::Timeout
        } else if err.is_connect() {
            ScrapeError::Connect
        } else {
            ScrapeError::Request(err.to_string())
        }
    }
}

impl IntoResponse for ScrapeError {
    fn into_response(self) -> Response {
        (self.status(), Json(ScrapeResponse::failure(self.to_string()))).into_response()
    }
}

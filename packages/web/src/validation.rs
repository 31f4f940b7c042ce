//! Client-side URL check run before anything is sent to the server

use std::sync::OnceLock;

use regex::Regex;

/// Scheme, then at least two characters with no whitespace, and the first of
/// them must not be one of `/ $ . ? #`.
const URL_PATTERN: &str = r"(?i)^(https?://)[^\s/$.?#].[^\s]*$";

static URL_REGEX: OnceLock<Regex> = OnceLock::new();

fn url_regex() -> &'static Regex {
    URL_REGEX.get_or_init(|| Regex::new(URL_PATTERN).expect("URL_PATTERN is a valid regex"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a URL.")]
    Empty,

    #[error("Please enter a valid URL starting with http:// or https://")]
    Malformed,
}

/// Trim the raw field value and check it looks like an HTTP(S) URL.
///
/// Returns the trimmed URL, which is what gets sent to the server.
pub fn validate_url(input: &str) -> Result<String, ValidationError> {
    let url = input.trim();
    if url.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !url_regex().is_match(url) {
        return Err(ValidationError::Malformed);
    }
    Ok(url.to_string())
}

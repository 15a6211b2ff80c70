//! Fetch error types.

use thiserror::Error;

/// Errors that can occur when reading a document.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to send the request or read the file.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Non-success status for a document.
    #[error("HTTP {status} for {location}")]
    HttpError { status: u16, location: String },

    /// The document does not exist.
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Failed to parse the document body.
    #[error("Failed to parse {location}: {message}")]
    ParseError { location: String, message: String },
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => FetchError::HttpError {
                status: status.as_u16(),
                location: e.url().map(|u| u.to_string()).unwrap_or_default(),
            },
            None => FetchError::RequestError(e.to_string()),
        }
    }
}

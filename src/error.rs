//! Errors surfaced by the catalog client.

use thiserror::Error;

/// Failures of a remote catalog call.
///
/// Every variant is propagated to the caller; the client never turns a
/// failure into an empty result.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The server answered with a non-success status.
    #[error("HTTP error: {status}")]
    Http { status: u16 },

    /// The body was not JSON or did not carry the expected `result` field.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Connection refused, reset, timed out and other transport failures.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Page number or offset outside the accepted range.
    #[error("Invalid page: {0}")]
    InvalidPage(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

//! Fetch error type

use reqwest::StatusCode;
use thiserror::Error;

/// Failure to obtain a product. Callers treat every variant the same way.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport, timeout or body decoding failure
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },
}

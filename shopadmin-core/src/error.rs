//! Error type for remote resource calls.

use thiserror::Error;

/// A failed request against one of the remote services.
///
/// Transport failures and non-2xx responses are deliberately not
/// distinguished anywhere downstream; callers only learn that the request
/// failed. No retry or backoff is attempted.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request failed: {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

//! Thin HTTP clients, one per remote resource.
//!
//! Each operation performs exactly one round-trip and propagates failure
//! unchanged; deciding what a failure means is the store's job. No
//! authentication, no server-side pagination, no timeouts.

mod customers;
mod orders;
mod products;

pub use customers::{CustomerApi, CustomerClient};
pub use orders::{OrderApi, OrderClient};
pub use products::{ProductApi, ProductClient};

use crate::error::ApiError;

/// Turns a non-2xx response into an [`ApiError`].
pub(crate) fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            url: response.url().to_string(),
            status,
        })
    }
}

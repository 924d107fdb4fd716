//! Client for the cart/order service.
//!
//! Orders are read/delete-only in this system; there are no create or
//! update operations at all.

use reqwest::Client;

use super::check;
use crate::error::ApiError;
use crate::models::Order;

#[allow(async_fn_in_trait)]
pub trait OrderClient {
    async fn fetch_all(&self) -> Result<Vec<Order>, ApiError>;
    /// Deletes by id and returns the id; the service sends no reliable body.
    async fn delete(&self, id: u64) -> Result<u64, ApiError>;
}

#[derive(Debug, Clone)]
pub struct OrderApi {
    client: Client,
    base_url: String,
}

impl OrderApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl OrderClient for OrderApi {
    async fn fetch_all(&self) -> Result<Vec<Order>, ApiError> {
        let response = self.client.get(&self.base_url).send().await?;
        Ok(check(response)?.json().await?)
    }

    async fn delete(&self, id: u64) -> Result<u64, ApiError> {
        let url = format!("{}/{}", self.base_url, id);
        let response = self.client.delete(url).send().await?;
        check(response)?;
        Ok(id)
    }
}

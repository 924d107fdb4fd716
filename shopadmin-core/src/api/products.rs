//! Client for the product-catalog service.

use reqwest::Client;

use super::check;
use crate::error::ApiError;
use crate::models::Product;

/// Operations against the product catalog.
///
/// Implemented by [`ProductApi`] and by in-memory fakes in store tests.
#[allow(async_fn_in_trait)]
pub trait ProductClient {
    async fn fetch_all(&self) -> Result<Vec<Product>, ApiError>;
    async fn fetch(&self, id: u64) -> Result<Product, ApiError>;
    async fn create(&self, product: &Product) -> Result<Product, ApiError>;
    async fn update(&self, product: &Product) -> Result<Product, ApiError>;
    /// Deletes by id and returns the id; the service sends no reliable body.
    async fn delete(&self, id: u64) -> Result<u64, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ProductApi {
    client: Client,
    base_url: String,
}

impl ProductApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

impl ProductClient for ProductApi {
    async fn fetch_all(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.client.get(&self.base_url).send().await?;
        Ok(check(response)?.json().await?)
    }

    async fn fetch(&self, id: u64) -> Result<Product, ApiError> {
        let response = self.client.get(self.item_url(id)).send().await?;
        Ok(check(response)?.json().await?)
    }

    async fn create(&self, product: &Product) -> Result<Product, ApiError> {
        let response = self
            .client
            .post(&self.base_url)
            .json(product)
            .send()
            .await?;
        Ok(check(response)?.json().await?)
    }

    async fn update(&self, product: &Product) -> Result<Product, ApiError> {
        let response = self
            .client
            .put(self.item_url(product.id))
            .json(product)
            .send()
            .await?;
        Ok(check(response)?.json().await?)
    }

    async fn delete(&self, id: u64) -> Result<u64, ApiError> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        check(response)?;
        Ok(id)
    }
}

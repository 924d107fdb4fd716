//! Client for the user-directory service.

use reqwest::Client;

use super::check;
use crate::error::ApiError;
use crate::models::{Customer, NewCustomer};

#[allow(async_fn_in_trait)]
pub trait CustomerClient {
    async fn fetch_all(&self) -> Result<Vec<Customer>, ApiError>;
    async fn create(&self, customer: &NewCustomer) -> Result<Customer, ApiError>;
    async fn update(&self, customer: &Customer) -> Result<Customer, ApiError>;
    /// Deletes by id and returns the id; the service sends no reliable body.
    async fn delete(&self, id: u64) -> Result<u64, ApiError>;
}

#[derive(Debug, Clone)]
pub struct CustomerApi {
    client: Client,
    base_url: String,
}

impl CustomerApi {
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

impl CustomerClient for CustomerApi {
    async fn fetch_all(&self) -> Result<Vec<Customer>, ApiError> {
        let response = self.client.get(&self.base_url).send().await?;
        Ok(check(response)?.json().await?)
    }

    async fn create(&self, customer: &NewCustomer) -> Result<Customer, ApiError> {
        let response = self
            .client
            .post(&self.base_url)
            .json(customer)
            .send()
            .await?;
        Ok(check(response)?.json().await?)
    }

    async fn update(&self, customer: &Customer) -> Result<Customer, ApiError> {
        let response = self
            .client
            .put(self.item_url(customer.id))
            .json(customer)
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

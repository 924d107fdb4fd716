use super::FetchStatus;
use crate::api::CustomerClient;
use crate::error::ApiError;
use crate::models::{Customer, NewCustomer};

/// Client-side mirror of the customer directory.
#[derive(Debug)]
pub struct CustomerStore<C> {
    client: C,
    customers: Vec<Customer>,
    status: FetchStatus,
}

impl<C: CustomerClient> CustomerStore<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            customers: Vec::new(),
            status: FetchStatus::Idle,
        }
    }

    /// Snapshot of the cached collection.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    /// Replaces the whole cached collection with the server's.
    ///
    /// A failure leaves the collection as it was; the status flag is the
    /// only signal.
    pub async fn fetch_all(&mut self) {
        self.status = FetchStatus::Loading;
        match self.client.fetch_all().await {
            Ok(customers) => {
                self.customers = customers;
                self.status = FetchStatus::Succeeded;
            }
            Err(e) => {
                tracing::warn!("customer fetch failed: {}", e);
                self.status = FetchStatus::Failed;
            }
        }
    }

    /// Creates the customer remotely and appends the server-returned entity
    /// (which carries the assigned id).
    pub async fn create(&mut self, customer: &NewCustomer) -> Result<Customer, ApiError> {
        let created = self.client.create(customer).await?;
        self.customers.push(created.clone());
        Ok(created)
    }

    /// Updates the customer remotely and replaces the first cached entity
    /// with the same id. No cached match is a silent no-op.
    pub async fn update(&mut self, customer: &Customer) -> Result<Customer, ApiError> {
        let updated = self.client.update(customer).await?;
        if let Some(existing) = self.customers.iter_mut().find(|c| c.id == updated.id) {
            *existing = updated.clone();
        }
        Ok(updated)
    }

    /// Deletes remotely and drops every cached customer with that id.
    pub async fn delete(&mut self, id: u64) -> Result<u64, ApiError> {
        let deleted = self.client.delete(id).await?;
        self.customers.retain(|c| c.id != deleted);
        Ok(deleted)
    }
}

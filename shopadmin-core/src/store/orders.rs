use super::FetchStatus;
use crate::api::OrderClient;
use crate::error::ApiError;
use crate::models::Order;

/// Client-side mirror of the order collection. Read/delete-only.
#[derive(Debug)]
pub struct OrderStore<C> {
    client: C,
    orders: Vec<Order>,
    status: FetchStatus,
}

impl<C: OrderClient> OrderStore<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            orders: Vec::new(),
            status: FetchStatus::Idle,
        }
    }

    /// Snapshot of the cached collection.
    pub fn orders(&self) -> &[Order] {
        &self.orders
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
            Ok(orders) => {
                self.orders = orders;
                self.status = FetchStatus::Succeeded;
            }
            Err(e) => {
                tracing::warn!("order fetch failed: {}", e);
                self.status = FetchStatus::Failed;
            }
        }
    }

    /// Deletes remotely and drops every cached order with that id.
    pub async fn delete(&mut self, id: u64) -> Result<u64, ApiError> {
        let deleted = self.client.delete(id).await?;
        self.orders.retain(|o| o.id != deleted);
        Ok(deleted)
    }
}

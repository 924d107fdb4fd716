use super::FetchStatus;
use crate::api::ProductClient;
use crate::error::ApiError;
use crate::models::Product;

/// Client-side mirror of the product catalog.
#[derive(Debug)]
pub struct ProductStore<C> {
    client: C,
    products: Vec<Product>,
    status: FetchStatus,
}

impl<C: ProductClient> ProductStore<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            products: Vec::new(),
            status: FetchStatus::Idle,
        }
    }

    /// Snapshot of the cached collection.
    pub fn products(&self) -> &[Product] {
        &self.products
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
            Ok(products) => {
                self.products = products;
                self.status = FetchStatus::Succeeded;
            }
            Err(e) => {
                tracing::warn!("product fetch failed: {}", e);
                self.status = FetchStatus::Failed;
            }
        }
    }

    /// Fetches a single product directly from the catalog, bypassing the
    /// cache.
    pub async fn fetch(&self, id: u64) -> Result<Product, ApiError> {
        self.client.fetch(id).await
    }

    /// Creates the product remotely and appends the server-returned entity.
    pub async fn create(&mut self, product: &Product) -> Result<Product, ApiError> {
        let created = self.client.create(product).await?;
        self.products.push(created.clone());
        Ok(created)
    }

    /// Updates the product remotely and replaces the first cached entity
    /// with the same id. No cached match is a silent no-op; the server
    /// accepted the write either way.
    pub async fn update(&mut self, product: &Product) -> Result<Product, ApiError> {
        let updated = self.client.update(product).await?;
        if let Some(existing) = self.products.iter_mut().find(|p| p.id == updated.id) {
            *existing = updated.clone();
        }
        Ok(updated)
    }

    /// Deletes remotely and drops every cached entity with that id.
    pub async fn delete(&mut self, id: u64) -> Result<u64, ApiError> {
        let deleted = self.client.delete(id).await?;
        self.products.retain(|p| p.id != deleted);
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    struct FakeProductClient {
        products: Vec<Product>,
        fail: Arc<AtomicBool>,
    }

    impl FakeProductClient {
        fn new(products: Vec<Product>) -> (Self, Arc<AtomicBool>) {
            let fail = Arc::new(AtomicBool::new(false));
            (
                Self {
                    products,
                    fail: fail.clone(),
                },
                fail,
            )
        }

        fn error() -> ApiError {
            ApiError::Status {
                url: "http://fake/products".to_string(),
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            }
        }

        fn check(&self) -> Result<(), ApiError> {
            if self.fail.load(Ordering::SeqCst) {
                Err(Self::error())
            } else {
                Ok(())
            }
        }
    }

    impl ProductClient for FakeProductClient {
        async fn fetch_all(&self) -> Result<Vec<Product>, ApiError> {
            self.check()?;
            Ok(self.products.clone())
        }

        async fn fetch(&self, id: u64) -> Result<Product, ApiError> {
            self.check()?;
            self.products
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or_else(Self::error)
        }

        async fn create(&self, product: &Product) -> Result<Product, ApiError> {
            self.check()?;
            Ok(product.clone())
        }

        async fn update(&self, product: &Product) -> Result<Product, ApiError> {
            self.check()?;
            Ok(product.clone())
        }

        async fn delete(&self, id: u64) -> Result<u64, ApiError> {
            self.check()?;
            Ok(id)
        }
    }

    fn product(id: u64, title: &str, price: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            category: Category::Electronics,
            image: None,
            description: None,
            rating: None,
        }
    }

    #[tokio::test]
    async fn test_store_starts_idle_and_empty() {
        let (client, _) = FakeProductClient::new(vec![]);
        let store = ProductStore::new(client);
        assert_eq!(store.status(), FetchStatus::Idle);
        assert!(store.products().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_replaces_collection() {
        let (client, _) = FakeProductClient::new(vec![product(1, "A", 10.0)]);
        let mut store = ProductStore::new(client);
        // Seed the cache with something the next fetch does not return.
        store.create(&product(99, "Stale", 1.0)).await.unwrap();

        store.fetch_all().await;
        assert_eq!(store.status(), FetchStatus::Succeeded);
        assert_eq!(store.products(), &[product(1, "A", 10.0)]);
    }

    #[tokio::test]
    async fn test_fetch_all_failure_keeps_collection() {
        let (client, fail) = FakeProductClient::new(vec![product(1, "A", 10.0)]);
        let mut store = ProductStore::new(client);
        store.fetch_all().await;
        assert_eq!(store.status(), FetchStatus::Succeeded);

        fail.store(true, Ordering::SeqCst);
        store.fetch_all().await;
        assert_eq!(store.status(), FetchStatus::Failed);
        assert_eq!(store.products(), &[product(1, "A", 10.0)]);
    }

    #[tokio::test]
    async fn test_create_appends_server_entity() {
        let (client, _) = FakeProductClient::new(vec![product(1, "A", 10.0)]);
        let mut store = ProductStore::new(client);
        store.fetch_all().await;

        let created = store.create(&product(2, "B", 20.0)).await.unwrap();
        assert_eq!(created.id, 2);
        assert_eq!(store.products().len(), 2);
        assert_eq!(store.products()[1], product(2, "B", 20.0));
    }

    #[tokio::test]
    async fn test_create_failure_leaves_collection_and_status() {
        let (client, fail) = FakeProductClient::new(vec![product(1, "A", 10.0)]);
        let mut store = ProductStore::new(client);
        store.fetch_all().await;

        fail.store(true, Ordering::SeqCst);
        assert!(store.create(&product(2, "B", 20.0)).await.is_err());
        assert_eq!(store.products().len(), 1);
        // Writes never touch the status flag.
        assert_eq!(store.status(), FetchStatus::Succeeded);
    }

    #[tokio::test]
    async fn test_update_replaces_only_matching_entity() {
        let (client, _) = FakeProductClient::new(vec![
            product(1, "A", 10.0),
            product(2, "B", 20.0),
            product(3, "C", 30.0),
        ]);
        let mut store = ProductStore::new(client);
        store.fetch_all().await;

        store.update(&product(2, "B2", 25.0)).await.unwrap();
        assert_eq!(
            store.products(),
            &[
                product(1, "A", 10.0),
                product(2, "B2", 25.0),
                product(3, "C", 30.0),
            ]
        );
    }

    #[tokio::test]
    async fn test_update_missing_id_is_silent_noop() {
        let (client, _) = FakeProductClient::new(vec![product(1, "A", 10.0)]);
        let mut store = ProductStore::new(client);
        store.fetch_all().await;

        let result = store.update(&product(42, "Ghost", 5.0)).await;
        assert!(result.is_ok());
        assert_eq!(store.products(), &[product(1, "A", 10.0)]);
    }

    #[tokio::test]
    async fn test_delete_removes_every_match_and_is_idempotent() {
        let (client, _) =
            FakeProductClient::new(vec![product(1, "A", 10.0), product(2, "B", 20.0)]);
        let mut store = ProductStore::new(client);
        store.fetch_all().await;

        assert_eq!(store.delete(1).await.unwrap(), 1);
        assert_eq!(store.products(), &[product(2, "B", 20.0)]);

        // Second delete of the same id: remote accepts, cache unchanged.
        assert_eq!(store.delete(1).await.unwrap(), 1);
        assert_eq!(store.products(), &[product(2, "B", 20.0)]);
    }

    #[tokio::test]
    async fn test_writes_leave_idle_status_untouched() {
        let (client, _) = FakeProductClient::new(vec![]);
        let mut store = ProductStore::new(client);

        store.create(&product(1, "A", 10.0)).await.unwrap();
        store.delete(1).await.unwrap();
        assert_eq!(store.status(), FetchStatus::Idle);
    }

    #[tokio::test]
    async fn test_product_lifecycle_scenario() {
        let (client, _) =
            FakeProductClient::new(vec![product(1, "A", 10.0), product(2, "B", 20.0)]);
        let mut store = ProductStore::new(client);

        store.fetch_all().await;
        assert_eq!(store.products().len(), 2);
        assert_eq!(store.status(), FetchStatus::Succeeded);

        store.update(&product(2, "B2", 25.0)).await.unwrap();
        assert_eq!(
            store.products(),
            &[product(1, "A", 10.0), product(2, "B2", 25.0)]
        );

        store.delete(1).await.unwrap();
        assert_eq!(store.products(), &[product(2, "B2", 25.0)]);
    }
}

//! Process-wide state container.

use crate::api::{CustomerApi, OrderApi, ProductApi};
use crate::store::{CustomerStore, OrderStore, ProductStore};

/// The three collection stores behind the console, one per remote resource.
///
/// Built once and passed explicitly to whatever renders views; there is no
/// global. The stores are independent: nothing here enforces the id
/// references orders make into the other two collections.
#[derive(Debug)]
pub struct AdminState {
    pub products: ProductStore<ProductApi>,
    pub orders: OrderStore<OrderApi>,
    pub customers: CustomerStore<CustomerApi>,
}

impl AdminState {
    pub fn new(products_url: &str, orders_url: &str, customers_url: &str) -> Self {
        Self {
            products: ProductStore::new(ProductApi::new(products_url)),
            orders: OrderStore::new(OrderApi::new(orders_url)),
            customers: CustomerStore::new(CustomerApi::new(customers_url)),
        }
    }
}

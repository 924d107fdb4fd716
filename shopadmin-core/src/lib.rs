//! Shopadmin Core Library
//!
//! Shared types and logic for the shopadmin console: entity models, thin
//! HTTP clients for the three remote services, the collection stores that
//! mirror them in memory, and the pure projections derived from store
//! snapshots.

pub mod api;
pub mod debounce;
pub mod error;
pub mod models;
pub mod projection;
pub mod state;
pub mod stats;
pub mod store;

pub use api::{CustomerApi, CustomerClient, OrderApi, OrderClient, ProductApi, ProductClient};
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use error::ApiError;
pub use models::{Category, Customer, LineItem, NewCustomer, Order, Product, Rating};
pub use projection::{customer_page, order_page, product_page, Page, ProductSort};
pub use state::AdminState;
pub use stats::DashboardStats;
pub use store::{CustomerStore, FetchStatus, OrderStore, ProductStore};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

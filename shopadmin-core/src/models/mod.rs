//! Entity types for the three remote collections.
//!
//! The collections are independent: orders reference product and user ids by
//! convention only, and nothing validates those references locally.

mod customer;
mod order;
mod product;

pub use customer::{Customer, NewCustomer};
pub use order::{LineItem, Order};
pub use product::{Category, Product, Rating, PLACEHOLDER_IMAGE};

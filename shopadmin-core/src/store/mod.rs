//! In-memory mirrors of the remote collections.
//!
//! Each store owns one collection plus a fetch-status flag and reconciles
//! the collection with the outcome of its own lifecycle operations. The
//! remote service stays the sole source of truth; the mirror is best-effort
//! and can diverge from it. Lifecycle operations take `&mut self`, so two
//! operations on the same store can never be in flight at once.

mod customers;
mod orders;
mod products;

pub use customers::CustomerStore;
pub use orders::OrderStore;
pub use products::ProductStore;

/// Outcome of the most recent fetch-all for a store.
///
/// Writes never touch this flag; a failed create, update or delete is
/// visible only through the operation's own return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

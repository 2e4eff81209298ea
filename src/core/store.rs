//! Persistence contract the dispatcher relies on

use super::order::{Order, OrderId, OrderRecord};
use anyhow::Result;
use async_trait::async_trait;

/// Store trait for orders
///
/// Implementations provide persistence for a single `orders` collection.
/// The dispatcher is agnostic to the underlying storage mechanism; any
/// failure is returned as an error and reported to the client as an
/// internal error.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a record
    ///
    /// Without an id the record is inserted under a fresh, unique id. With an
    /// id the row for that id is written. The returned order always has its
    /// id set.
    async fn save(&self, record: OrderRecord) -> Result<Order>;

    /// Replace the row of an existing order
    ///
    /// Returns `None` when no row has `order.id`; nothing is written then.
    async fn update(&self, order: Order) -> Result<Option<Order>>;

    /// Get an order by ID
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>>;

    /// List all orders
    async fn find_all(&self) -> Result<Vec<Order>>;

    /// Check whether an order exists
    async fn exists_by_id(&self, id: OrderId) -> Result<bool>;

    /// Delete an order
    ///
    /// Fails if no order has this id; callers check existence first.
    async fn delete_by_id(&self, id: OrderId) -> Result<()>;
}

//! In-memory implementation of OrderStore for testing and development

use crate::core::{Order, OrderId, OrderRecord, OrderStore};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory order store
///
/// Useful for testing and development. Uses RwLock for thread-safe access
/// and a monotonically increasing sequence for ids, starting at 1.
#[derive(Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<BTreeMap<OrderId, Order>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryOrderStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn save(&self, record: OrderRecord) -> Result<Order> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let id = match record.id {
            Some(id) => {
                // Keep the sequence ahead of explicitly written ids
                self.next_id
                    .fetch_max(id.get().saturating_add(1), Ordering::SeqCst);
                id
            }
            None => self
                .next_id
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
                .map(OrderId)
                .map_err(|_| anyhow!("Order id sequence exhausted"))?,
        };

        let order = record.with_id(id);
        orders.insert(id, order.clone());

        Ok(order)
    }

    async fn update(&self, order: Order) -> Result<Option<Order>> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        Ok(orders.get_mut(&order.id).map(|stored| {
            *stored = order.clone();
            order
        }))
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(orders.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(orders.values().cloned().collect())
    }

    async fn exists_by_id(&self, id: OrderId) -> Result<bool> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(orders.contains_key(&id))
    }

    async fn delete_by_id(&self, id: OrderId) -> Result<()> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        orders
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| anyhow!("No order with id {} to delete", id))
    }
}

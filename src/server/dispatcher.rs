//! Order dispatcher: validation, store calls and outcome selection
//!
//! Each operation is transport-agnostic and returns `Result<_, OrderError>`.
//! For writes, validation always runs before any store call.

use crate::core::validation::{validate_for_create, validate_for_update};
use crate::core::{Order, OrderError, OrderId, OrderPayload, OrderStore};
use chrono::{Local, NaiveDate};
use std::sync::Arc;

/// Confirmation returned by a successful delete
pub const DELETE_CONFIRMATION: &str = "Order deleted successfully";

/// Source of the server's current date
pub type Clock = fn() -> NaiveDate;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Maps order operations onto an [`OrderStore`]
#[derive(Clone)]
pub struct OrderDispatcher {
    store: Arc<dyn OrderStore>,
    today: Clock,
}

impl OrderDispatcher {
    /// Create a dispatcher over the given store, dating orders with the local clock
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self {
            store,
            today: local_today,
        }
    }

    /// Replace the clock used to stamp `orderDate` on create
    pub fn with_clock(mut self, today: Clock) -> Self {
        self.today = today;
        self
    }

    /// Create an order
    ///
    /// The server's date replaces any client-supplied `orderDate` before
    /// validation; the client `id` is ignored.
    #[tracing::instrument(skip_all)]
    pub async fn create(&self, mut payload: OrderPayload) -> Result<Order, OrderError> {
        let order_date = (self.today)();
        payload.order_date = Some(order_date);

        let violations = validate_for_create(&payload);
        if !violations.is_empty() {
            tracing::debug!(count = violations.len(), "create rejected by validation");
            return Err(OrderError::Validation(violations));
        }

        let fields = payload.valid_fields().ok_or_else(|| {
            OrderError::Internal("validated payload is missing a field".to_string())
        })?;

        let order = self.store.save(fields.into_record(order_date)).await?;
        tracing::info!(id = %order.id, "order created");
        Ok(order)
    }

    /// List every order
    #[tracing::instrument(skip_all)]
    pub async fn list(&self) -> Result<Vec<Order>, OrderError> {
        Ok(self.store.find_all().await?)
    }

    /// Get one order
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: OrderId) -> Result<Order, OrderError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(OrderError::NotFound(id))
    }

    /// Replace the customer name, shipping address and total of an order
    ///
    /// `id` and `orderDate` of the stored order are kept. Any `id` or
    /// `orderDate` in the payload only takes part in validation.
    #[tracing::instrument(skip(self, payload))]
    pub async fn update(&self, id: OrderId, payload: OrderPayload) -> Result<Order, OrderError> {
        let violations = validate_for_update(&payload);
        if !violations.is_empty() {
            tracing::debug!(count = violations.len(), "update rejected by validation");
            return Err(OrderError::Validation(violations));
        }

        let fields = payload.valid_fields().ok_or_else(|| {
            OrderError::Internal("validated payload is missing a field".to_string())
        })?;

        let mut order = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(OrderError::NotFound(id))?;
        order.apply(fields);

        // The row may have been deleted since the lookup
        let order = self
            .store
            .update(order)
            .await?
            .ok_or(OrderError::NotFound(id))?;
        tracing::info!(id = %order.id, "order updated");
        Ok(order)
    }

    /// Delete an order
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: OrderId) -> Result<&'static str, OrderError> {
        if !self.store.exists_by_id(id).await? {
            return Err(OrderError::NotFound(id));
        }

        self.store.delete_by_id(id).await?;
        tracing::info!(%id, "order deleted");
        Ok(DELETE_CONFIRMATION)
    }
}

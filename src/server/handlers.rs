//! Order HTTP handlers
//!
//! Thin wrappers that hand extracted input to the [`OrderDispatcher`] and
//! pick the success status. Failures render through `OrderError`.

use super::dispatcher::OrderDispatcher;
use crate::core::{Order, OrderError, OrderIdPath, OrderJson};
use axum::{extract::State, http::StatusCode, response::Json};

pub async fn list_orders(
    State(dispatcher): State<OrderDispatcher>,
) -> Result<Json<Vec<Order>>, OrderError> {
    dispatcher.list().await.map(Json)
}

pub async fn get_order(
    State(dispatcher): State<OrderDispatcher>,
    OrderIdPath(id): OrderIdPath,
) -> Result<Json<Order>, OrderError> {
    dispatcher.get(id).await.map(Json)
}

pub async fn create_order(
    State(dispatcher): State<OrderDispatcher>,
    OrderJson(payload): OrderJson,
) -> Result<(StatusCode, Json<Order>), OrderError> {
    let order = dispatcher.create(payload).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn update_order(
    State(dispatcher): State<OrderDispatcher>,
    OrderIdPath(id): OrderIdPath,
    OrderJson(payload): OrderJson,
) -> Result<Json<Order>, OrderError> {
    dispatcher.update(id, payload).await.map(Json)
}

pub async fn delete_order(
    State(dispatcher): State<OrderDispatcher>,
    OrderIdPath(id): OrderIdPath,
) -> Result<&'static str, OrderError> {
    dispatcher.delete(id).await
}

//! Router builder for order and health routes

use super::dispatcher::OrderDispatcher;
use super::handlers::{create_order, delete_order, get_order, list_orders, update_order};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

/// Build the order routes
///
/// - GET /orders - List all orders
/// - POST /orders - Create an order
/// - GET /orders/{id} - Get a specific order
/// - PUT /orders/{id} - Replace an order's editable fields
/// - DELETE /orders/{id} - Delete an order
pub fn build_order_routes(dispatcher: OrderDispatcher) -> Router {
    Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route(
            "/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .with_state(dispatcher)
}

/// Build health check routes
pub fn build_health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

/// Full application router with request tracing
pub fn build_app(dispatcher: OrderDispatcher) -> Router {
    build_health_routes()
        .merge(build_order_routes(dispatcher))
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "order-service"
    }))
}

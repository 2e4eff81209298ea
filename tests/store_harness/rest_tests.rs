//! REST integration test macro for order stores.
//!
//! The `rest_integration_tests!` macro generates HTTP-level tests that drive
//! an `OrderStore` through full REST round-trips:
//! JSON → HTTP request → extractor → dispatcher → store → HTTP response → JSON.
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_rest_create`: POST 201, generated id, server date
//! - `test_rest_get`: create then GET 200 with identical body
//! - `test_rest_list`: GET 200 with every order
//! - `test_rest_update`: PUT 200 keeps id and date
//! - `test_rest_delete`: DELETE 200 confirmation, then GET 404
//!
//! ## Validation
//! - `test_rest_create_blank_customer_name`: both customer name messages
//! - `test_rest_create_negative_total`
//! - `test_rest_create_reports_every_field`
//! - `test_rest_update_validates_before_lookup`
//!
//! ## Not found
//! - `test_rest_get_missing`, `test_rest_update_missing`, `test_rest_delete_missing`
//! - `test_rest_delete_twice`
#[macro_export]
macro_rules! rest_integration_tests {
    ($store_factory:expr) => {
        mod rest_integration_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use orders::core::ErrorResponse;
            use serde_json::{Value, json};
            use std::sync::Arc;

            async fn make_server() -> TestServer {
                let store = $store_factory;
                build_test_server(Arc::new(store))
            }

            async fn create(server: &TestServer) -> Value {
                let response = server.post("/orders").json(&john_taylor()).await;
                response.assert_status(StatusCode::CREATED);
                response.json()
            }

            // ==============================================================
            // CRUD
            // ==============================================================

            #[tokio::test]
            async fn test_rest_create() {
                let server = make_server().await;

                let response = server
                    .post("/orders")
                    .json(&json!({
                        "customerName": "John Taylor",
                        "orderDate": "1999-01-01",
                        "shippingAddress": "333 King St",
                        "total": 300.0
                    }))
                    .await;

                response.assert_status(StatusCode::CREATED);

                let body: Value = response.json();
                assert!(body["id"].as_i64().is_some(), "id should be generated");
                assert_eq!(body["customerName"], "John Taylor");
                assert_eq!(body["orderDate"], fixed_today().to_string());
                assert_eq!(body["shippingAddress"], "333 King St");
                assert_eq!(body["total"], 300.0);
            }

            #[tokio::test]
            async fn test_rest_get() {
                let server = make_server().await;
                let created = create(&server).await;

                let response = server.get(&format!("/orders/{}", created["id"])).await;

                response.assert_status(StatusCode::OK);
                let body: Value = response.json();
                assert_eq!(body, created);
            }

            #[tokio::test]
            async fn test_rest_list() {
                let server = make_server().await;

                let empty: Vec<Value> = server.get("/orders").await.json();
                assert!(empty.is_empty());

                create(&server).await;
                create(&server).await;

                let response = server.get("/orders").await;
                response.assert_status(StatusCode::OK);
                let body: Vec<Value> = response.json();
                assert_eq!(body.len(), 2);
            }

            #[tokio::test]
            async fn test_rest_update() {
                let server = make_server().await;
                let created = create(&server).await;
                let id = created["id"].as_i64().unwrap();

                let response = server
                    .put(&format!("/orders/{}", id))
                    .json(&json!({
                        "id": id + 100,
                        "customerName": "Tempestt Taylor",
                        "orderDate": "2031-07-04",
                        "shippingAddress": "123 Main St",
                        "total": 33.0
                    }))
                    .await;

                response.assert_status(StatusCode::OK);
                let body: Value = response.json();
                assert_eq!(body["id"], id);
                assert_eq!(body["orderDate"], created["orderDate"]);
                assert_eq!(body["customerName"], "Tempestt Taylor");
                assert_eq!(body["shippingAddress"], "123 Main St");
                assert_eq!(body["total"], 33.0);

                let fetched: Value = server.get(&format!("/orders/{}", id)).await.json();
                assert_eq!(fetched, body);
            }

            #[tokio::test]
            async fn test_rest_delete() {
                let server = make_server().await;
                let created = create(&server).await;
                let path = format!("/orders/{}", created["id"]);

                let response = server.delete(&path).await;
                response.assert_status(StatusCode::OK);
                response.assert_text("Order deleted successfully");

                server.get(&path).await.assert_status(StatusCode::NOT_FOUND);
            }

            // ==============================================================
            // Validation
            // ==============================================================

            #[tokio::test]
            async fn test_rest_create_blank_customer_name() {
                let server = make_server().await;

                let response = server
                    .post("/orders")
                    .json(&json!({
                        "customerName": "",
                        "shippingAddress": "333 King St",
                        "total": 300.0
                    }))
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: ErrorResponse = response.json();
                assert_eq!(body.message, "Validation Error");
                assert!(body.errors.contains(&"customerName: Customer name required".to_string()));
                assert!(
                    body.errors
                        .contains(&"customerName: Customer name must not be blank".to_string())
                );
            }

            #[tokio::test]
            async fn test_rest_create_negative_total() {
                let server = make_server().await;

                let response = server
                    .post("/orders")
                    .json(&json!({
                        "customerName": "John",
                        "shippingAddress": "333 King St",
                        "total": -300.0
                    }))
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: ErrorResponse = response.json();
                assert_eq!(body.errors, vec!["total: Total must be positive"]);
            }

            #[tokio::test]
            async fn test_rest_create_reports_every_field() {
                let server = make_server().await;

                let response = server.post("/orders").json(&json!({})).await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: ErrorResponse = response.json();
                assert_eq!(
                    body.errors,
                    vec![
                        "customerName: Customer name required",
                        "shippingAddress: Shipping address required",
                        "total: Total required",
                        "customerName: Customer name must not be blank",
                    ]
                );

                let all: Vec<Value> = server.get("/orders").await.json();
                assert!(all.is_empty(), "Nothing is persisted on validation failure");
            }

            #[tokio::test]
            async fn test_rest_update_validates_before_lookup() {
                let server = make_server().await;

                let response = server
                    .put("/orders/1000")
                    .json(&json!({ "customerName": "John" }))
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: ErrorResponse = response.json();
                assert_eq!(
                    body.errors,
                    vec![
                        "orderDate: Order date required",
                        "shippingAddress: Shipping address required",
                        "total: Total required",
                    ]
                );
            }

            // ==============================================================
            // Not found
            // ==============================================================

            #[tokio::test]
            async fn test_rest_get_missing() {
                let server = make_server().await;

                let response = server.get("/orders/1000").await;

                response.assert_status(StatusCode::NOT_FOUND);
                let body: ErrorResponse = response.json();
                assert_eq!(body.message, "Order not found with id: 1000");
                assert!(body.errors.is_empty());
            }

            #[tokio::test]
            async fn test_rest_update_missing() {
                let server = make_server().await;

                let response = server
                    .put("/orders/1000")
                    .json(&json!({
                        "customerName": "John",
                        "orderDate": "2024-01-01",
                        "shippingAddress": "333 King St",
                        "total": 1.0
                    }))
                    .await;

                response.assert_status(StatusCode::NOT_FOUND);
                let body: ErrorResponse = response.json();
                assert_eq!(body.message, "Order not found with id: 1000");
            }

            #[tokio::test]
            async fn test_rest_delete_missing() {
                let server = make_server().await;

                let response = server.delete("/orders/-1").await;

                response.assert_status(StatusCode::NOT_FOUND);
                let body: ErrorResponse = response.json();
                assert_eq!(body.message, "Order not found with id: -1");
            }

            #[tokio::test]
            async fn test_rest_delete_twice() {
                let server = make_server().await;
                let created = create(&server).await;
                let path = format!("/orders/{}", created["id"]);

                server.delete(&path).await.assert_status(StatusCode::OK);
                server.delete(&path).await.assert_status(StatusCode::NOT_FOUND);
            }
        }
    };
}

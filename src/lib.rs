//! # Order Service
//!
//! A REST service managing a single resource, the **Order**, over a
//! pluggable store.
//!
//! ## Features
//!
//! - **Ordered validation**: every field rule runs and every violation is reported
//! - **Explicit dispatch**: create, list, get, update and delete return typed results
//! - **Uniform errors**: `{ message, errors }` bodies with deterministic status codes
//! - **Pluggable storage**: in-memory by default, PostgreSQL behind the `postgres` feature
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use orders::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     ServerBuilder::new()
//!         .with_store(InMemoryOrderStore::new())
//!         .serve("127.0.0.1:3000")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod telemetry;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        ErrorResponse, FieldViolation, Order, OrderError, OrderId, OrderPayload, OrderRecord,
        OrderStore,
    };

    // === Validation ===
    pub use crate::core::validation::{validate, validate_for_create, validate_for_update};

    // === Server ===
    pub use crate::server::{DELETE_CONFIRMATION, OrderDispatcher, ServerBuilder, build_app};

    // === Storage ===
    pub use crate::storage::InMemoryOrderStore;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresOrderStore;

    // === Configuration ===
    pub use crate::config::{ServiceConfig, StorageBackend};

    // === Re-exports ===
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
}

//! Server module: dispatcher, HTTP handlers, routes and the server builder
//!
//! The dispatcher holds the order semantics; everything else here adapts it
//! to axum.

pub mod builder;
pub mod dispatcher;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use dispatcher::{Clock, DELETE_CONFIRMATION, OrderDispatcher};
pub use router::{build_app, build_health_routes, build_order_routes};

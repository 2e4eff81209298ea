//! Core module containing the order entity, its validation and the store contract

pub mod error;
pub mod extractors;
pub mod order;
pub mod store;
pub mod validation;

pub use error::{ErrorResponse, OrderError};
pub use extractors::{OrderIdPath, OrderJson};
pub use order::{Order, OrderId, OrderPayload, OrderRecord, ValidFields};
pub use store::OrderStore;
pub use validation::FieldViolation;

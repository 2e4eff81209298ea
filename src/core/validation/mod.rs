//! Validation of order payloads
//!
//! Rules are an explicit, ordered table of predicate + message pairs. Every
//! rule is evaluated and every failure is reported; nothing short-circuits.

pub mod rules;
pub mod validators;

pub use rules::{
    FieldRule, FieldViolation, ORDER_RULES, validate, validate_for_create, validate_for_update,
};

//! Ordered field rules for order payloads

use super::validators::{not_blank, not_empty, positive, present};
use crate::core::order::OrderPayload;
use serde::Serialize;
use std::fmt;

/// One failed rule: the offending field and a human-readable reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A predicate over a payload paired with the message reported when it fails
pub struct FieldRule {
    pub field: &'static str,
    pub message: &'static str,
    pub passes: fn(&OrderPayload) -> bool,
}

impl FieldRule {
    pub fn check(&self, payload: &OrderPayload) -> Option<FieldViolation> {
        if (self.passes)(payload) {
            None
        } else {
            Some(FieldViolation {
                field: self.field,
                message: self.message,
            })
        }
    }
}

/// Structural rules applied to every write, in reporting order
pub const ORDER_RULES: &[FieldRule] = &[
    FieldRule {
        field: "customerName",
        message: "Customer name required",
        passes: |p| not_empty(p.customer_name.as_deref()),
    },
    FieldRule {
        field: "orderDate",
        message: "Order date required",
        passes: |p| present(p.order_date.as_ref()),
    },
    FieldRule {
        field: "shippingAddress",
        message: "Shipping address required",
        passes: |p| not_blank(p.shipping_address.as_deref()),
    },
    FieldRule {
        field: "total",
        message: "Total required",
        passes: |p| present(p.total.as_ref()),
    },
    FieldRule {
        field: "total",
        message: "Total must be positive",
        passes: |p| positive(p.total),
    },
];

/// Extra pass run on create after [`ORDER_RULES`]
pub const CREATE_RULES: &[FieldRule] = &[FieldRule {
    field: "customerName",
    message: "Customer name must not be blank",
    passes: |p| not_blank(p.customer_name.as_deref()),
}];

/// Evaluate every rule in order and collect all failures
pub fn validate_with(rules: &[FieldRule], payload: &OrderPayload) -> Vec<FieldViolation> {
    rules.iter().filter_map(|rule| rule.check(payload)).collect()
}

/// Structural rules only
pub fn validate(payload: &OrderPayload) -> Vec<FieldViolation> {
    validate_with(ORDER_RULES, payload)
}

/// Structural rules followed by the create-only blank check
///
/// Both passes may report `customerName`; their messages are concatenated.
pub fn validate_for_create(payload: &OrderPayload) -> Vec<FieldViolation> {
    let mut violations = validate(payload);
    violations.extend(validate_with(CREATE_RULES, payload));
    violations
}

pub fn validate_for_update(payload: &OrderPayload) -> Vec<FieldViolation> {
    validate(payload)
}

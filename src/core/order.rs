//! The Order entity and the candidate payload clients submit

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Store-assigned identifier of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub i64);

impl OrderId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(OrderId)
    }
}

impl From<i64> for OrderId {
    fn from(id: i64) -> Self {
        OrderId(id)
    }
}

/// A persisted order
///
/// Every field is guaranteed present: an `Order` only comes out of a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub order_date: NaiveDate,
    pub shipping_address: String,
    pub total: f64,
}

impl Order {
    /// Replace the client-editable fields, leaving `id` and `order_date` alone
    pub fn apply(&mut self, fields: ValidFields) {
        self.customer_name = fields.customer_name;
        self.shipping_address = fields.shipping_address;
        self.total = fields.total;
    }

    /// Turn the order back into a record addressed at its own id
    pub fn into_record(self) -> OrderRecord {
        OrderRecord {
            id: Some(self.id),
            customer_name: self.customer_name,
            order_date: self.order_date,
            shipping_address: self.shipping_address,
            total: self.total,
        }
    }
}

/// What a store is asked to persist
///
/// `id: None` means insert with a fresh id; `Some` means write that row.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub id: Option<OrderId>,
    pub customer_name: String,
    pub order_date: NaiveDate,
    pub shipping_address: String,
    pub total: f64,
}

impl OrderRecord {
    /// Attach the id a store assigned
    pub fn with_id(self, id: OrderId) -> Order {
        Order {
            id,
            customer_name: self.customer_name,
            order_date: self.order_date,
            shipping_address: self.shipping_address,
            total: self.total,
        }
    }
}

/// Candidate order as sent by a client
///
/// Every field is optional so a missing value surfaces as a validation
/// violation rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    /// Ignored: ids are assigned by the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}

impl OrderPayload {
    pub fn new(
        customer_name: impl Into<String>,
        shipping_address: impl Into<String>,
        total: f64,
    ) -> Self {
        Self {
            customer_name: Some(customer_name.into()),
            shipping_address: Some(shipping_address.into()),
            total: Some(total),
            ..Self::default()
        }
    }

    pub fn with_order_date(mut self, date: NaiveDate) -> Self {
        self.order_date = Some(date);
        self
    }

    /// Extract the editable fields once validation has passed
    ///
    /// Returns `None` if any of them is missing, which validation rules out.
    pub fn valid_fields(&self) -> Option<ValidFields> {
        Some(ValidFields {
            customer_name: self.customer_name.clone()?,
            shipping_address: self.shipping_address.clone()?,
            total: self.total?,
        })
    }
}

/// The client-editable fields of an order, known to be present
#[derive(Debug, Clone, PartialEq)]
pub struct ValidFields {
    pub customer_name: String,
    pub shipping_address: String,
    pub total: f64,
}

impl ValidFields {
    pub fn into_record(self, order_date: NaiveDate) -> OrderRecord {
        OrderRecord {
            id: None,
            customer_name: self.customer_name,
            order_date,
            shipping_address: self.shipping_address,
            total: self.total,
        }
    }
}

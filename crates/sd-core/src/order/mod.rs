//! Order domain models
//!
//! Orders are read-only records resolved through one of three identifier
//! spaces: the order number, a carrier AWB, or a customer-supplied reference.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::{AwbNumber, OrderNumber};
use crate::ports::errors::OrderLookupError;

/// Number of trailing reference characters used for reference matching.
pub const REFERENCE_SUFFIX_LEN: usize = 3;

/// A single line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: u32,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub sku: String,
}

/// Shipment order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_number: OrderNumber,
    pub customer_name: String,
    pub customer_phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    pub shipping_company: String,
    pub address: String,
    pub total_amount: f64,
    /// Free-form payment label, e.g. `COD` or `Prepaid`.
    pub payment_method: String,
    pub order_date: NaiveDate,
    /// Free-form status label, e.g. `Pending`, `In Transit`, `Delivered`.
    pub status: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl Order {
    /// Whether this order answers to the given reference.
    ///
    /// The rule is deliberately loose: the order number must contain the
    /// last [`REFERENCE_SUFFIX_LEN`] characters of the reference.
    pub fn matches_reference(&self, reference: &str) -> bool {
        self.order_number.contains(reference_suffix(reference))
    }
}

/// Last [`REFERENCE_SUFFIX_LEN`] characters of `reference`, or all of it when shorter.
pub fn reference_suffix(reference: &str) -> &str {
    let start = reference
        .char_indices()
        .rev()
        .nth(REFERENCE_SUFFIX_LEN - 1)
        .map_or(0, |(idx, _)| idx);
    &reference[start..]
}

/// Serialized form of an order table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderSeed {
    pub orders: Vec<Order>,
    pub awb_index: HashMap<AwbNumber, OrderNumber>,
}

/// Immutable in-memory order table.
///
/// Dataset order is preserved; reference lookups return the first match.
#[derive(Debug, Clone)]
pub struct OrderDataset {
    orders: Vec<Order>,
    by_number: HashMap<OrderNumber, usize>,
    awb_index: HashMap<AwbNumber, OrderNumber>,
}

impl OrderDataset {
    /// Build the table. Order numbers must be unique; AWB entries may point
    /// at orders that do not exist.
    pub fn new(
        orders: Vec<Order>,
        awb_index: HashMap<AwbNumber, OrderNumber>,
    ) -> Result<Self, OrderLookupError> {
        let mut by_number = HashMap::with_capacity(orders.len());
        for (idx, order) in orders.iter().enumerate() {
            if by_number.insert(order.order_number.clone(), idx).is_some() {
                return Err(OrderLookupError::Dataset(format!(
                    "duplicate order number {}",
                    order.order_number
                )));
            }
        }

        Ok(Self {
            orders,
            by_number,
            awb_index,
        })
    }

    pub fn from_seed(seed: OrderSeed) -> Result<Self, OrderLookupError> {
        Self::new(seed.orders, seed.awb_index)
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn find_by_number(&self, order_number: &str) -> Option<&Order> {
        self.by_number
            .get(order_number)
            .map(|&idx| &self.orders[idx])
    }

    pub fn find_by_awb(&self, awb: &str) -> Option<&Order> {
        self.awb_index
            .get(awb)
            .and_then(|order_number| self.find_by_number(order_number))
    }

    pub fn find_by_reference(&self, reference: &str) -> Option<&Order> {
        self.orders
            .iter()
            .find(|order| order.matches_reference(reference))
    }
}

//! ID type wrappers for type safety.

mod id_macro;

use serde::{Deserialize, Serialize};

use id_macro::impl_id;

/// Shop-issued order number, the primary key of an order (e.g. `ORD-2025-10021`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

/// Carrier-issued airway bill tracking code (e.g. `AWB987654321`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AwbNumber(String);

impl_id!(OrderNumber, AwbNumber);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn order_number_serializes_as_plain_string() {
        let number = OrderNumber::from("ORD-2025-10021");
        let json = serde_json::to_string(&number).unwrap();
        assert_eq!(json, "\"ORD-2025-10021\"");
    }

    #[test]
    fn awb_number_can_be_looked_up_by_str() {
        let mut index = HashMap::new();
        index.insert(AwbNumber::from("AWB1"), OrderNumber::from("ORD-1"));

        assert_eq!(index.get("AWB1").map(OrderNumber::as_str), Some("ORD-1"));
        assert!(index.get("AWB2").is_none());
    }
}

use async_trait::async_trait;

use crate::order::Order;
use crate::ports::errors::OrderLookupError;

/// Order source port.
///
/// Stands in for the order backend. Every lookup reports a miss as
/// `Ok(None)`; errors are reserved for the source itself failing.
#[async_trait]
pub trait OrderLookupPort: Send + Sync {
    /// Exact lookup by order number.
    async fn fetch_by_number(&self, order_number: &str) -> Result<Option<Order>, OrderLookupError>;

    /// Lookup through the AWB → order number mapping.
    async fn fetch_by_awb(&self, awb: &str) -> Result<Option<Order>, OrderLookupError>;

    /// First order whose number contains the last three characters of `reference`.
    async fn fetch_by_reference(&self, reference: &str)
        -> Result<Option<Order>, OrderLookupError>;
}

use std::fmt;
use std::sync::Arc;

use sd_core::order::Order;
use sd_core::ports::{OrderLookupError, OrderLookupPort};
use tracing::{info, info_span, Instrument};

/// Identifier an order is looked up by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderQuery {
    Number(String),
    Awb(String),
    Reference(String),
}

impl OrderQuery {
    pub fn kind(&self) -> &'static str {
        match self {
            OrderQuery::Number(_) => "number",
            OrderQuery::Awb(_) => "awb",
            OrderQuery::Reference(_) => "reference",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            OrderQuery::Number(v) | OrderQuery::Awb(v) | OrderQuery::Reference(v) => v,
        }
    }
}

impl fmt::Display for OrderQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.value())
    }
}

/// Use case for resolving a single order.
pub struct LookupOrder {
    orders: Arc<dyn OrderLookupPort>,
}

impl LookupOrder {
    pub fn new(orders: Arc<dyn OrderLookupPort>) -> Self {
        Self { orders }
    }

    /// Resolve `query` against the order source. A miss is `Ok(None)`.
    pub async fn execute(&self, query: &OrderQuery) -> Result<Option<Order>, OrderLookupError> {
        let span = info_span!(
            "usecase.lookup_order.execute",
            kind = query.kind(),
            value = query.value()
        );
        async {
            let found = match query {
                OrderQuery::Number(number) => self.orders.fetch_by_number(number).await?,
                OrderQuery::Awb(awb) => self.orders.fetch_by_awb(awb).await?,
                OrderQuery::Reference(reference) => {
                    self.orders.fetch_by_reference(reference).await?
                }
            };

            match &found {
                Some(order) => info!(order_number = %order.order_number, "order found"),
                None => info!("order not found"),
            }
            Ok(found)
        }
        .instrument(span)
        .await
    }
}

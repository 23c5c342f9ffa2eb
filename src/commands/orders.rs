//! Order lookup commands

use sd_app::usecases::{LookupOrder, OrderQuery};
use sd_core::order::Order;
use sd_core::ports::OrderLookupError;
use tracing::{info_span, Instrument};

use crate::cli::OrderCmd;

/// Run one lookup. A miss is `Ok(None)`.
pub async fn run_order(
    lookup: &LookupOrder,
    cmd: OrderCmd,
) -> Result<Option<Order>, OrderLookupError> {
    let query = OrderQuery::from(cmd);
    let span = info_span!("command.order", query = %query);
    lookup.execute(&query).instrument(span).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use sd_infra::MockOrderService;
    use std::sync::Arc;
    use std::time::Duration;

    fn lookup() -> LookupOrder {
        let service = MockOrderService::with_seed_data(Duration::ZERO).unwrap();
        LookupOrder::new(Arc::new(service))
    }

    #[tokio::test]
    async fn reference_command_finds_matching_order() {
        let order = run_order(
            &lookup(),
            OrderCmd::Reference {
                reference: "CUST-REF-022".to_string(),
            },
        )
        .await
        .unwrap()
        .unwrap();

        assert_eq!(order.order_number.as_str(), "ORD-2025-10022");
    }

    #[tokio::test]
    async fn unknown_awb_is_none() {
        let result = run_order(
            &lookup(),
            OrderCmd::Awb {
                awb: "AWB000000000".to_string(),
            },
        )
        .await;

        assert_eq!(result, Ok(None));
    }
}

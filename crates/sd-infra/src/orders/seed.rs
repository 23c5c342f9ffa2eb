use sd_core::order::{OrderDataset, OrderSeed};
use sd_core::ports::OrderLookupError;

const SEED_ORDERS_JSON: &str = include_str!("../../data/mock_orders.json");

/// Parse the bundled demo order table.
pub fn load_seed_dataset() -> Result<OrderDataset, OrderLookupError> {
    parse_dataset(SEED_ORDERS_JSON)
}

/// Parse an order table in the seed JSON layout.
pub fn parse_dataset(raw: &str) -> Result<OrderDataset, OrderLookupError> {
    let seed: OrderSeed = serde_json::from_str(raw)
        .map_err(|e| OrderLookupError::Dataset(format!("failed to parse order seed: {e}")))?;
    OrderDataset::from_seed(seed)
}

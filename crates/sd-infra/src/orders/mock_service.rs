//! In-memory order source with simulated network latency.
//!
//! Stands in for the order backend until a real HTTP client exists. Every
//! lookup sleeps for the configured latency before answering, so callers can
//! exercise their loading states.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use sd_core::order::{Order, OrderDataset};
use sd_core::ports::{OrderLookupError, OrderLookupPort};
use tokio::time::sleep;
use tracing::debug;

use super::seed::load_seed_dataset;

/// Round-trip latency used when none is configured.
pub const DEFAULT_LOOKUP_LATENCY: Duration = Duration::from_millis(800);

pub struct MockOrderService {
    dataset: Arc<OrderDataset>,
    latency: Duration,
}

impl MockOrderService {
    pub fn new(dataset: OrderDataset, latency: Duration) -> Self {
        Self {
            dataset: Arc::new(dataset),
            latency,
        }
    }

    /// Service over the bundled demo orders.
    pub fn with_seed_data(latency: Duration) -> Result<Self, OrderLookupError> {
        Ok(Self::new(load_seed_dataset()?, latency))
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl OrderLookupPort for MockOrderService {
    async fn fetch_by_number(&self, order_number: &str) -> Result<Option<Order>, OrderLookupError> {
        self.simulate_latency().await;
        let found = self.dataset.find_by_number(order_number).cloned();
        debug!(order_number, hit = found.is_some(), "mock lookup by number");
        Ok(found)
    }

    async fn fetch_by_awb(&self, awb: &str) -> Result<Option<Order>, OrderLookupError> {
        self.simulate_latency().await;
        let found = self.dataset.find_by_awb(awb).cloned();
        debug!(awb, hit = found.is_some(), "mock lookup by awb");
        Ok(found)
    }

    async fn fetch_by_reference(
        &self,
        reference: &str,
    ) -> Result<Option<Order>, OrderLookupError> {
        self.simulate_latency().await;
        let found = self.dataset.find_by_reference(reference).cloned();
        debug!(reference, hit = found.is_some(), "mock lookup by reference");
        Ok(found)
    }
}

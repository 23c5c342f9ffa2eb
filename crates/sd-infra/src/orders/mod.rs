//! Order source adapters.

pub mod mock_service;
pub mod seed;

pub use mock_service::{MockOrderService, DEFAULT_LOOKUP_LATENCY};
pub use seed::load_seed_dataset;

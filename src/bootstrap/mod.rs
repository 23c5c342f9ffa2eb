//! Process bootstrap: configuration, tracing and dependency wiring.

pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config, ResolvedConfig};
pub use self::tracing::init_tracing_subscriber;
pub use wiring::{wire_dependencies, WiringError};

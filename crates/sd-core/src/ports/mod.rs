//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations, so the core stays independent of
//! storage backends and order sources.

pub mod errors;
pub mod onboarding;
pub mod orders;
pub mod storage;

pub use errors::OrderLookupError;
pub use onboarding::OnboardingStatePort;
pub use orders::OrderLookupPort;
pub use storage::KeyValueStorePort;

//! Business logic use cases

pub mod onboarding;
pub mod orders;

pub use onboarding::{OnboardingError, OnboardingTracker};
pub use orders::{LookupOrder, OrderQuery};

//! Onboarding use cases
//!
//! The tracker owns the in-memory onboarding state and keeps it in step
//! with the persisted record.

pub mod tracker;

pub use tracker::{OnboardingError, OnboardingTracker};

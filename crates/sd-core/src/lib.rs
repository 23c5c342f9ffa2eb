//! # sd-core
//!
//! Core domain models and business logic for ShipDesk.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod config;
pub mod ids;
pub mod onboarding;
pub mod order;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use ids::{AwbNumber, OrderNumber};
pub use onboarding::{
    OnboardingAction, OnboardingEvent, OnboardingState, OnboardingStateMachine, OnboardingStep,
    StateDecodeError, TransitionRejected, UserSetupData,
};
pub use order::{LineItem, Order, OrderDataset};

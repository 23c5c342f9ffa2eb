//! Onboarding domain models
//!
//! This module defines the first-run flow of a new user: the business setup
//! form, the guided tour, and the terminal completed state.

pub mod state;
pub mod state_machine;

pub use state::{
    OnboardingState, OnboardingStep, StateDecodeError, UserSetupData,
    CURRENT_ONBOARDING_SCHEMA_VERSION,
};
pub use state_machine::{
    OnboardingAction, OnboardingEvent, OnboardingStateMachine, TransitionRejected,
};

pub mod onboarding;
pub mod orders;

pub use onboarding::run_onboarding;
pub use orders::run_order;

//! ShipDesk application layer
//!
//! Use cases that drive the onboarding flow and order lookups over the
//! ports defined in `sd-core`.

pub mod app_paths;
pub mod deps;
pub mod usecases;

pub use app_paths::AppPaths;
pub use deps::AppDeps;

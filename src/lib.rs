//! ShipDesk command line front end.
//!
//! Wires the onboarding tracker and the order lookup service from
//! configuration and exposes them as subcommands printing JSON.

pub mod bootstrap;
pub mod cli;
pub mod commands;

use anyhow::Context;
use sd_app::usecases::{LookupOrder, OnboardingTracker};
use sd_app::AppDeps;

use crate::cli::Command;

/// Execute `command` against the wired dependencies and render the result
/// as pretty JSON. A lookup miss renders as `null`.
pub async fn run(command: Command, deps: AppDeps) -> anyhow::Result<String> {
    let output = match command {
        Command::Onboarding { cmd } => {
            let tracker = OnboardingTracker::load(deps.onboarding_state).await?;
            let state = commands::run_onboarding(&tracker, cmd).await?;
            serde_json::to_string_pretty(&state)
        }
        Command::Order { cmd } => {
            let lookup = LookupOrder::new(deps.order_lookup);
            let order = commands::run_order(&lookup, cmd).await?;
            serde_json::to_string_pretty(&order)
        }
    };

    output.context("Failed to render command output")
}

//! Onboarding commands

use sd_app::usecases::{OnboardingError, OnboardingTracker};
use sd_core::onboarding::OnboardingState;
use tracing::{info_span, Instrument};

use crate::cli::OnboardingCmd;

/// Apply one onboarding command and return the resulting state.
pub async fn run_onboarding(
    tracker: &OnboardingTracker,
    cmd: OnboardingCmd,
) -> Result<OnboardingState, OnboardingError> {
    let span = info_span!("command.onboarding", cmd = ?cmd);
    async {
        match cmd {
            OnboardingCmd::Show => Ok(tracker.state().await),
            OnboardingCmd::Setup(args) => tracker.complete_setup(args.into()).await,
            OnboardingCmd::Next => tracker.next_tour_step().await,
            OnboardingCmd::Prev => tracker.prev_tour_step().await,
            OnboardingCmd::Finish => tracker.complete_tour().await,
            OnboardingCmd::Skip => tracker.skip_onboarding().await,
            OnboardingCmd::Reset => tracker.reset().await,
        }
    }
    .instrument(span)
    .await
}

//! Onboarding tracker.
//!
//! Holds the session's onboarding state, feeds user intents through the
//! onboarding state machine and persists every accepted transition.

use std::sync::Arc;

use sd_core::onboarding::{
    OnboardingAction, OnboardingEvent, OnboardingState, OnboardingStateMachine, OnboardingStep,
    TransitionRejected, UserSetupData,
};
use sd_core::ports::OnboardingStatePort;
use tokio::sync::Mutex;
use tracing::{debug, info, info_span, Instrument};

/// Errors produced by the onboarding tracker.
/// 入门引导跟踪器产生的错误。
#[derive(Debug, thiserror::Error)]
pub enum OnboardingError {
    #[error("{event} is not applicable while onboarding is at step {step:?}")]
    NotApplicable {
        step: OnboardingStep,
        event: &'static str,
    },
    #[error("failed to load onboarding state")]
    Load(#[source] anyhow::Error),
    #[error("failed to persist onboarding state")]
    Persist(#[source] anyhow::Error),
    #[error("failed to clear onboarding state")]
    Clear(#[source] anyhow::Error),
}

impl From<TransitionRejected> for OnboardingError {
    fn from(rejected: TransitionRejected) -> Self {
        OnboardingError::NotApplicable {
            step: rejected.step,
            event: rejected.event,
        }
    }
}

/// Session-wide onboarding state holder.
///
/// Construct once per session and share by reference. Operations are
/// serialized, so concurrent callers observe a linear history.
pub struct OnboardingTracker {
    state_port: Arc<dyn OnboardingStatePort>,
    state: Mutex<OnboardingState>,
}

impl OnboardingTracker {
    /// Restore the tracker from the persisted record.
    pub async fn load(state_port: Arc<dyn OnboardingStatePort>) -> Result<Self, OnboardingError> {
        let state = state_port
            .get_state()
            .await
            .map_err(OnboardingError::Load)?;
        debug!(step = ?state.current_step, "onboarding state loaded");
        Ok(Self::with_state(state_port, state))
    }

    /// Tracker starting from a known state, without touching storage.
    pub fn with_state(state_port: Arc<dyn OnboardingStatePort>, state: OnboardingState) -> Self {
        Self {
            state_port,
            state: Mutex::new(state),
        }
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> OnboardingState {
        self.state.lock().await.clone()
    }

    pub async fn complete_setup(
        &self,
        data: UserSetupData,
    ) -> Result<OnboardingState, OnboardingError> {
        self.dispatch(OnboardingEvent::CompleteSetup { data }).await
    }

    pub async fn next_tour_step(&self) -> Result<OnboardingState, OnboardingError> {
        self.dispatch(OnboardingEvent::NextTourStep).await
    }

    pub async fn prev_tour_step(&self) -> Result<OnboardingState, OnboardingError> {
        self.dispatch(OnboardingEvent::PrevTourStep).await
    }

    pub async fn complete_tour(&self) -> Result<OnboardingState, OnboardingError> {
        self.dispatch(OnboardingEvent::CompleteTour).await
    }

    pub async fn skip_onboarding(&self) -> Result<OnboardingState, OnboardingError> {
        self.dispatch(OnboardingEvent::Skip).await
    }

    /// Erase the persisted record and start over from the default state.
    ///
    /// Not a state machine transition: it applies from every step,
    /// including `Completed`.
    pub async fn reset(&self) -> Result<OnboardingState, OnboardingError> {
        let mut guard = self.state.lock().await;
        let span = info_span!("usecase.onboarding_tracker.reset", from = ?guard.current_step);
        async {
            self.state_port
                .reset()
                .await
                .map_err(OnboardingError::Clear)?;
            *guard = OnboardingState::default();
            info!("onboarding state reset");
            Ok(guard.clone())
        }
        .instrument(span)
        .await
    }

    async fn dispatch(&self, event: OnboardingEvent) -> Result<OnboardingState, OnboardingError> {
        let mut guard = self.state.lock().await;

        let span = info_span!("usecase.onboarding_tracker.dispatch", event = ?event);
        async {
            let from = guard.current_step;
            let (next, actions) =
                OnboardingStateMachine::transition(guard.clone(), event).map_err(|rejected| {
                    debug!(step = ?from, event = rejected.event, "event rejected");
                    OnboardingError::from(rejected)
                })?;

            for action in actions {
                match action {
                    OnboardingAction::PersistState => self
                        .state_port
                        .set_state(&next)
                        .await
                        .map_err(OnboardingError::Persist)?,
                }
            }

            info!(
                from = ?from,
                to = ?next.current_step,
                tour_step_index = next.tour_step_index,
                "onboarding state transition"
            );
            *guard = next.clone();
            Ok(next)
        }
        .instrument(span)
        .await
    }
}

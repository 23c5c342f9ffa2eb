//! Onboarding state machine.
//!
//! Defines a pure state transition function for the onboarding flow.
//! Persistence is expressed as actions and executed by the caller.

use super::state::{OnboardingState, OnboardingStep, UserSetupData};

/// Events that drive the onboarding flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingEvent {
    /// Setup form submitted.
    CompleteSetup { data: UserSetupData },
    /// Advance the tour by one step.
    NextTourStep,
    /// Go back one tour step.
    PrevTourStep,
    /// User finished the tour.
    CompleteTour,
    /// User skipped the rest of the onboarding.
    Skip,
}

impl OnboardingEvent {
    pub fn name(&self) -> &'static str {
        match self {
            OnboardingEvent::CompleteSetup { .. } => "complete_setup",
            OnboardingEvent::NextTourStep => "next_tour_step",
            OnboardingEvent::PrevTourStep => "prev_tour_step",
            OnboardingEvent::CompleteTour => "complete_tour",
            OnboardingEvent::Skip => "skip",
        }
    }
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingAction {
    /// Overwrite the persisted record with the new state.
    PersistState,
}

/// An event that cannot apply to the current step.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{event} is not applicable in step {step:?}")]
pub struct TransitionRejected {
    pub step: OnboardingStep,
    pub event: &'static str,
}

/// Pure onboarding state machine.
///
/// Tour index moves apply in every step and never change the step.
/// Finishing or skipping needs the setup form first, and the form cannot
/// be resubmitted once onboarding is completed.
pub struct OnboardingStateMachine;

impl OnboardingStateMachine {
    pub fn transition(
        state: OnboardingState,
        event: OnboardingEvent,
    ) -> Result<(OnboardingState, Vec<OnboardingAction>), TransitionRejected> {
        let next = match (state.current_step, event) {
            (OnboardingStep::Setup | OnboardingStep::Tour, OnboardingEvent::CompleteSetup { data }) => {
                OnboardingState {
                    current_step: OnboardingStep::Tour,
                    user_setup_data: Some(data),
                    ..state
                }
            }
            (_, OnboardingEvent::NextTourStep) => OnboardingState {
                tour_step_index: state.tour_step_index.saturating_add(1),
                ..state
            },
            (_, OnboardingEvent::PrevTourStep) => OnboardingState {
                tour_step_index: state.tour_step_index.saturating_sub(1),
                ..state
            },
            // Finishing and skipping land in the same terminal state.
            (
                OnboardingStep::Tour | OnboardingStep::Completed,
                OnboardingEvent::CompleteTour | OnboardingEvent::Skip,
            ) => OnboardingState {
                is_completed: true,
                current_step: OnboardingStep::Completed,
                ..state
            },
            (step, event) => {
                return Err(TransitionRejected {
                    step,
                    event: event.name(),
                })
            }
        };

        Ok((next, vec![OnboardingAction::PersistState]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_data() -> UserSetupData {
        UserSetupData {
            business_name: "Delta Parcels".to_string(),
            contact_phone: "+20 122 555 0101".to_string(),
            pickup_address: "3 Port Said St, Alexandria".to_string(),
            preferred_courier: "Bosta".to_string(),
            same_day_delivery: false,
        }
    }

    fn tour_state(index: u32) -> OnboardingState {
        OnboardingState {
            current_step: OnboardingStep::Tour,
            tour_step_index: index,
            user_setup_data: Some(setup_data()),
            ..Default::default()
        }
    }

    fn apply(state: OnboardingState, event: OnboardingEvent) -> OnboardingState {
        OnboardingStateMachine::transition(state, event).unwrap().0
    }

    #[test]
    fn complete_setup_moves_to_tour_and_captures_data() {
        let (next, actions) = OnboardingStateMachine::transition(
            OnboardingState::default(),
            OnboardingEvent::CompleteSetup { data: setup_data() },
        )
        .unwrap();

        assert_eq!(next.current_step, OnboardingStep::Tour);
        assert_eq!(next.user_setup_data, Some(setup_data()));
        assert!(!next.is_completed);
        assert_eq!(actions, vec![OnboardingAction::PersistState]);
    }

    #[test]
    fn complete_setup_during_tour_replaces_data_and_keeps_index() {
        let data = UserSetupData {
            preferred_courier: "Aramex".to_string(),
            ..setup_data()
        };

        let next = apply(tour_state(2), OnboardingEvent::CompleteSetup { data: data.clone() });

        assert_eq!(next.current_step, OnboardingStep::Tour);
        assert_eq!(next.tour_step_index, 2);
        assert_eq!(next.user_setup_data, Some(data));
    }

    #[test]
    fn next_tour_step_increments_index() {
        let (next, actions) =
            OnboardingStateMachine::transition(tour_state(1), OnboardingEvent::NextTourStep)
                .unwrap();

        assert_eq!(next.tour_step_index, 2);
        assert_eq!(actions, vec![OnboardingAction::PersistState]);
    }

    #[test]
    fn prev_tour_step_is_floored_at_zero() {
        let (next, actions) =
            OnboardingStateMachine::transition(tour_state(0), OnboardingEvent::PrevTourStep)
                .unwrap();

        assert_eq!(next.tour_step_index, 0);
        assert_eq!(actions, vec![OnboardingAction::PersistState]);
    }

    #[test]
    fn prev_tour_step_repeated_yields_saturating_difference() {
        for (start, steps) in [(5u32, 3u32), (2, 7), (0, 1), (4, 4)] {
            let mut state = tour_state(start);
            for _ in 0..steps {
                state = apply(state, OnboardingEvent::PrevTourStep);
            }
            assert_eq!(state.tour_step_index, start.saturating_sub(steps));
        }
    }

    #[test]
    fn index_moves_apply_in_setup_step() {
        let state = apply(OnboardingState::default(), OnboardingEvent::NextTourStep);
        assert_eq!(state.current_step, OnboardingStep::Setup);
        assert_eq!(state.tour_step_index, 1);

        let state = apply(state, OnboardingEvent::PrevTourStep);
        let state = apply(state, OnboardingEvent::PrevTourStep);
        assert_eq!(state.tour_step_index, 0);
    }

    #[test]
    fn complete_tour_and_skip_reach_the_same_state() {
        let completed = apply(tour_state(3), OnboardingEvent::CompleteTour);
        let skipped = apply(tour_state(3), OnboardingEvent::Skip);

        assert_eq!(completed, skipped);
        assert!(completed.is_completed);
        assert_eq!(completed.current_step, OnboardingStep::Completed);
        assert_eq!(completed.tour_step_index, 3);
    }

    #[test]
    fn finishing_from_setup_is_rejected() {
        for event in [OnboardingEvent::CompleteTour, OnboardingEvent::Skip] {
            let name = event.name();
            let err = OnboardingStateMachine::transition(OnboardingState::default(), event)
                .unwrap_err();
            assert_eq!(
                err,
                TransitionRejected {
                    step: OnboardingStep::Setup,
                    event: name,
                }
            );
        }
    }

    #[test]
    fn completed_step_stays_completed() {
        let completed = apply(tour_state(1), OnboardingEvent::CompleteTour);

        for event in [
            OnboardingEvent::NextTourStep,
            OnboardingEvent::PrevTourStep,
            OnboardingEvent::CompleteTour,
            OnboardingEvent::Skip,
        ] {
            let next = apply(completed.clone(), event);
            assert_eq!(next.current_step, OnboardingStep::Completed);
            assert!(next.is_completed);
        }

        let err = OnboardingStateMachine::transition(
            completed,
            OnboardingEvent::CompleteSetup { data: setup_data() },
        )
        .unwrap_err();
        assert_eq!(err.step, OnboardingStep::Completed);
        assert_eq!(err.event, "complete_setup");
    }

    #[test]
    fn completed_step_always_carries_completion_flag() {
        let events = [
            OnboardingEvent::NextTourStep,
            OnboardingEvent::Skip,
            OnboardingEvent::CompleteSetup { data: setup_data() },
            OnboardingEvent::NextTourStep,
            OnboardingEvent::PrevTourStep,
            OnboardingEvent::PrevTourStep,
            OnboardingEvent::Skip,
            OnboardingEvent::NextTourStep,
            OnboardingEvent::CompleteTour,
            OnboardingEvent::CompleteSetup { data: setup_data() },
        ];

        let mut state = OnboardingState::default();
        for event in events {
            if let Ok((next, _)) = OnboardingStateMachine::transition(state.clone(), event) {
                state = next;
            }
            if state.current_step == OnboardingStep::Completed {
                assert!(state.is_completed);
            }
            if state.user_setup_data.is_none() {
                assert_eq!(state.current_step, OnboardingStep::Setup);
            }
        }
        assert_eq!(state.current_step, OnboardingStep::Completed);
    }
}

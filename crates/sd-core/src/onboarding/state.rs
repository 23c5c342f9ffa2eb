//! Persisted onboarding record and its decode rules.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Schema version written with every persisted record.
///
/// Records written before versioning carry no version field and decode as
/// the current version.
pub const CURRENT_ONBOARDING_SCHEMA_VERSION: u32 = 1;

/// Onboarding phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnboardingStep {
    /// Business setup form has not been submitted yet.
    #[default]
    Setup,
    /// Guided tour in progress.
    Tour,
    /// Tour finished or skipped. Terminal until a hard reset.
    Completed,
}

/// Business details captured by the setup form.
///
/// Validation of these fields belongs to the form, not to the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserSetupData {
    pub business_name: String,
    pub contact_phone: String,
    pub pickup_address: String,
    pub preferred_courier: String,
    pub same_day_delivery: bool,
}

/// Onboarding progress of a user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OnboardingState {
    pub schema_version: u32,
    pub is_completed: bool,
    pub current_step: OnboardingStep,
    pub tour_step_index: u32,
    pub user_setup_data: Option<UserSetupData>,
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_ONBOARDING_SCHEMA_VERSION,
            is_completed: false,
            current_step: OnboardingStep::Setup,
            tour_step_index: 0,
            user_setup_data: None,
        }
    }
}

/// Why a persisted record could not be turned back into state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateDecodeError {
    #[error("malformed onboarding record: {0}")]
    Malformed(String),

    #[error("onboarding record version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("inconsistent onboarding record: {0}")]
    Inconsistent(&'static str),
}

impl OnboardingState {
    /// Decode a persisted record.
    ///
    /// Unknown fields are ignored and missing fields take their defaults.
    /// Records that break the step invariants are rejected.
    pub fn decode(raw: &str) -> Result<Self, StateDecodeError> {
        let state: OnboardingState =
            serde_json::from_str(raw).map_err(|e| StateDecodeError::Malformed(e.to_string()))?;

        if state.schema_version > CURRENT_ONBOARDING_SCHEMA_VERSION {
            return Err(StateDecodeError::UnsupportedVersion {
                found: state.schema_version,
                supported: CURRENT_ONBOARDING_SCHEMA_VERSION,
            });
        }

        state.check_invariants()?;
        Ok(state)
    }

    /// Restore state from whatever the store returned.
    ///
    /// A missing record and an undecodable record both yield the default
    /// state; the decode failure is logged and otherwise dropped.
    pub fn restore(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        match Self::decode(raw) {
            Ok(state) => state,
            Err(err) => {
                warn!(error = %err, "discarding unreadable onboarding state");
                Self::default()
            }
        }
    }

    /// Serialize the full record for a single-key overwrite.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    fn check_invariants(&self) -> Result<(), StateDecodeError> {
        let completed_step = self.current_step == OnboardingStep::Completed;
        if completed_step && !self.is_completed {
            return Err(StateDecodeError::Inconsistent(
                "completed step without completion flag",
            ));
        }
        if self.user_setup_data.is_none() && self.current_step != OnboardingStep::Setup {
            return Err(StateDecodeError::Inconsistent(
                "setup data missing after the setup step",
            ));
        }
        Ok(())
    }
}

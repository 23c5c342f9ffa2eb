//! Key-value backed onboarding state repository
//!
//! This module provides the `OnboardingStatePort` implementation, keeping the
//! whole onboarding record as one JSON value under a single storage key.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use sd_core::onboarding::OnboardingState;
use sd_core::ports::{KeyValueStorePort, OnboardingStatePort};

pub const DEFAULT_ONBOARDING_STATE_KEY: &str = "shipdesk.onboarding";

pub struct KvOnboardingStateRepository {
    store: Arc<dyn KeyValueStorePort>,
    key: String,
}

impl KvOnboardingStateRepository {
    /// Create repository with a custom storage key
    pub fn new(store: Arc<dyn KeyValueStorePort>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Create repository with the default storage key
    pub fn with_defaults(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self::new(store, DEFAULT_ONBOARDING_STATE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[async_trait]
impl OnboardingStatePort for KvOnboardingStateRepository {
    async fn get_state(&self) -> anyhow::Result<OnboardingState> {
        let raw = self.store.get(&self.key).await?;
        Ok(OnboardingState::restore(raw.as_deref()))
    }

    async fn set_state(&self, state: &OnboardingState) -> anyhow::Result<()> {
        let json = state
            .encode()
            .map_err(|e| anyhow::anyhow!("Failed to serialize onboarding state: {e}"))?;

        self.store.set(&self.key, &json).await?;
        debug!(key = %self.key, step = ?state.current_step, "onboarding state persisted");
        Ok(())
    }

    async fn reset(&self) -> anyhow::Result<()> {
        self.store.remove(&self.key).await?;
        debug!(key = %self.key, "onboarding state cleared");
        Ok(())
    }
}

//! Onboarding state port / 入门引导状态端口
//!
//! This port defines the contract for persisting and retrieving onboarding state.
//! Implementations are provided by the infrastructure layer.
//! 具体实现由基础设施层提供。

use async_trait::async_trait;

use crate::onboarding::OnboardingState;

#[async_trait]
pub trait OnboardingStatePort: Send + Sync {
    /// Get current onboarding state
    /// 获取当前入门引导状态
    ///
    /// A missing or undecodable record yields the default state; only
    /// storage failures are errors.
    async fn get_state(&self) -> anyhow::Result<OnboardingState>;

    /// Overwrite the persisted onboarding state
    async fn set_state(&self, state: &OnboardingState) -> anyhow::Result<()>;

    /// Erase the persisted onboarding state
    /// 清除已持久化的入门引导状态
    async fn reset(&self) -> anyhow::Result<()>;

    /// Check if onboarding is completed
    async fn is_completed(&self) -> anyhow::Result<bool> {
        Ok(self.get_state().await?.is_completed)
    }
}

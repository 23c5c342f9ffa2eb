//! # Dependency Injection / 依赖注入
//!
//! Creates the infra adapters and groups them behind their ports. This is
//! the only module that depends on `sd-infra` and `sd-app` together, and it
//! only assembles: no business decisions are made here.
//!
//! 创建基础设施适配器并按端口分组。此模块只负责组装，不做任何业务决策。

use std::sync::Arc;

use sd_app::AppDeps;
use sd_core::ports::{KeyValueStorePort, OrderLookupError};
use sd_infra::{FileKeyValueStore, KvOnboardingStateRepository, MockOrderService};
use tracing::info;

use super::config::ResolvedConfig;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入过程中的错误
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Order dataset initialization failed: {0}")]
    OrderDataset(#[from] OrderLookupError),
}

/// Build the application dependencies from a resolved configuration.
/// 根据解析后的配置构建应用依赖。
pub fn wire_dependencies(config: &ResolvedConfig) -> WiringResult<AppDeps> {
    let paths = config.paths();

    let store: Arc<dyn KeyValueStorePort> = Arc::new(FileKeyValueStore::new(&paths.state_dir));
    let onboarding_state = Arc::new(KvOnboardingStateRepository::new(
        store,
        config.onboarding_key.clone(),
    ));

    let order_lookup = Arc::new(MockOrderService::with_seed_data(config.order_latency)?);

    info!(
        state_dir = %paths.state_dir.display(),
        onboarding_key = %config.onboarding_key,
        latency_ms = config.order_latency.as_millis() as u64,
        "dependencies wired"
    );

    Ok(AppDeps {
        onboarding_state,
        order_lookup,
    })
}

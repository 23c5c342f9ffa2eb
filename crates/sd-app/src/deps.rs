//! Dependency grouping for use case construction.
//! 用例构造所需的依赖分组。
//!
//! Plain parameter grouping: no defaults and no build steps.
//! 仅做参数分组：没有默认值，也没有构建步骤。

use std::sync::Arc;

use sd_core::ports::{OnboardingStatePort, OrderLookupPort};

/// Ports the application layer needs, all required.
/// 应用层需要的端口，全部必填。
#[derive(Clone)]
pub struct AppDeps {
    pub onboarding_state: Arc<dyn OnboardingStatePort>,
    pub order_lookup: Arc<dyn OrderLookupPort>,
}

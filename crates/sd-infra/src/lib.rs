pub mod fs;
pub mod onboarding_state;
pub mod orders;
pub mod storage;

pub use onboarding_state::KvOnboardingStateRepository;
pub use orders::MockOrderService;
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};

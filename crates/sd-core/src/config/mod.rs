//! # Pure Data Module / 纯数据模块 - Data Transfer Objects Only
//!
//! Defines the configuration data structure and the TOML → DTO mapping.
//! 定义配置数据结构以及 TOML → DTO 的映射。
//!
//! This module contains data only: no validation and no default value
//! calculation. Missing keys map to empty values, which are valid facts;
//! the bootstrap layer decides what an empty value means.
//!
//! > **此模块只包含数据结构定义，禁止验证逻辑和默认值计算。**

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding persisted client state (path info only, no existence check)
    /// 客户端状态目录（仅路径信息，不检查目录是否存在）
    pub data_dir: PathBuf,

    /// Storage key of the onboarding record (may be empty)
    /// 入门引导记录的存储键（可能为空）
    pub onboarding_key: String,

    /// Simulated order lookup latency, `None` when not configured
    pub order_latency_ms: Option<u64>,

    /// Also write logs to `<data_dir>/logs`
    pub file_logging: bool,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// **Prohibited / 禁止**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    /// 此方法不包含任何验证或默认值逻辑。空字符串是合法的"事实"。
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            data_dir: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("data_dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            onboarding_key: toml_value
                .get("storage")
                .and_then(|s| s.get("onboarding_key"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            order_latency_ms: toml_value
                .get("orders")
                .and_then(|o| o.get("latency_ms"))
                .and_then(|v| v.as_integer())
                .map(|ms| ms.max(0) as u64),
            file_logging: toml_value
                .get("logging")
                .and_then(|l| l.get("file_logging"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            data_dir: PathBuf::new(),
            onboarding_key: String::new(),
            order_latency_ms: None,
            file_logging: false,
        }
    }

    /// Create AppConfig rooted at a system data directory.
    ///
    /// The base directory is computed by the caller (e.g. with the `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            ..Self::empty()
        }
    }
}

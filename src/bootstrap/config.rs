//! # Configuration Loader / 配置加载器
//!
//! `load_config` only reads and parses: it accepts whatever the file holds.
//! Defaults are filled in afterwards by [`apply_defaults`], which is the one
//! place that decides what an empty value means.
//!
//! `load_config` 只负责读取和解析；默认值由 [`apply_defaults`] 统一填充。

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use sd_app::AppPaths;
use sd_core::config::AppConfig;
use sd_infra::fs::app_data_dir::{app_data_dir, DATA_DIR_ENV};
use sd_infra::onboarding_state::DEFAULT_ONBOARDING_STATE_KEY;
use sd_infra::orders::DEFAULT_LOOKUP_LATENCY;
use tracing::debug;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// **No validation is performed**: missing sections map to empty values.
/// **不做任何验证**：缺失的配置段映射为空值。
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Settings the runtime is wired from, every value filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub data_dir: PathBuf,
    pub onboarding_key: String,
    pub order_latency: Duration,
    pub file_logging: bool,
}

impl ResolvedConfig {
    pub fn paths(&self) -> AppPaths {
        AppPaths::from_data_dir(&self.data_dir)
    }
}

/// Locate, load and resolve the configuration.
/// 定位、加载并解析配置。
///
/// An explicit path must exist. Without one, `<data dir>/config.toml` is used
/// when present and built-in defaults otherwise. The platform data dir is
/// only looked up when nothing else names a data dir.
pub fn resolve_config(
    explicit_path: Option<PathBuf>,
    latency_override_ms: Option<u64>,
) -> anyhow::Result<ResolvedConfig> {
    let config = match explicit_path {
        Some(path) => load_config(path)?,
        None => {
            let platform_dir = app_data_dir()?;
            let default_path = AppPaths::from_data_dir(&platform_dir).config_path;
            if default_path.exists() {
                load_config(default_path)?
            } else {
                debug!(path = %default_path.display(), "no config file, using defaults");
                AppConfig::with_system_defaults(platform_dir)
            }
        }
    };

    let env_data_dir = std::env::var_os(DATA_DIR_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);

    apply_defaults(config, env_data_dir, app_data_dir, latency_override_ms)
}

/// Fill empty config values.
/// 填充配置中的空值。
///
/// Data dir precedence: environment, then config file, then `fallback_data_dir`.
/// Latency precedence: command line, then config file, then the built-in default.
///
/// `fallback_data_dir` runs only when neither the environment nor the file
/// names a data dir; its error is returned as is.
pub fn apply_defaults(
    config: AppConfig,
    env_data_dir: Option<PathBuf>,
    fallback_data_dir: impl FnOnce() -> anyhow::Result<PathBuf>,
    latency_override_ms: Option<u64>,
) -> anyhow::Result<ResolvedConfig> {
    let data_dir = match env_data_dir {
        Some(dir) => dir,
        None if config.data_dir.as_os_str().is_empty() => fallback_data_dir()?,
        None => config.data_dir,
    };

    let onboarding_key = if config.onboarding_key.is_empty() {
        DEFAULT_ONBOARDING_STATE_KEY.to_string()
    } else {
        config.onboarding_key
    };

    let order_latency = latency_override_ms
        .or(config.order_latency_ms)
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_LOOKUP_LATENCY);

    Ok(ResolvedConfig {
        data_dir,
        onboarding_key,
        order_latency,
        file_logging: config.file_logging,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fallback(dir: &'static str) -> impl FnOnce() -> anyhow::Result<PathBuf> {
        move || Ok(PathBuf::from(dir))
    }

    fn no_platform_dir() -> anyhow::Result<PathBuf> {
        anyhow::bail!("Unable to get platform data directory")
    }

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_load_config_reads_valid_toml() {
        let temp_file = write_config(
            r#"
            [storage]
            data_dir = "/srv/shipdesk"
            onboarding_key = "merchant-42.onboarding"

            [orders]
            latency_ms = 25

            [logging]
            file_logging = true
        "#,
        );

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/shipdesk"));
        assert_eq!(config.onboarding_key, "merchant-42.onboarding");
        assert_eq!(config.order_latency_ms, Some(25));
        assert!(config.file_logging);
    }

    #[test]
    fn test_load_config_returns_error_on_invalid_toml() {
        let temp_file = write_config("[storage\ndata_dir = ");

        let result = load_config(temp_file.path().to_path_buf());

        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_returns_error_on_missing_file() {
        let result = load_config(PathBuf::from("/definitely/not/here/config.toml"));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_apply_defaults_fills_empty_values() {
        let resolved = apply_defaults(
            AppConfig::empty(),
            None,
            fallback("/home/user/.local/share/shipdesk"),
            None,
        )
        .unwrap();

        assert_eq!(
            resolved.data_dir,
            PathBuf::from("/home/user/.local/share/shipdesk")
        );
        assert_eq!(resolved.onboarding_key, DEFAULT_ONBOARDING_STATE_KEY);
        assert_eq!(resolved.order_latency, DEFAULT_LOOKUP_LATENCY);
        assert!(!resolved.file_logging);
    }

    #[test]
    fn test_apply_defaults_keeps_configured_values() {
        let config = AppConfig {
            data_dir: PathBuf::from("/srv/shipdesk"),
            onboarding_key: "tenant.onboarding".to_string(),
            order_latency_ms: Some(0),
            file_logging: true,
        };

        let resolved = apply_defaults(config, None, fallback("/fallback"), None).unwrap();

        assert_eq!(resolved.data_dir, PathBuf::from("/srv/shipdesk"));
        assert_eq!(resolved.onboarding_key, "tenant.onboarding");
        assert_eq!(resolved.order_latency, Duration::ZERO);
        assert!(resolved.file_logging);
    }

    #[test]
    fn test_apply_defaults_env_and_cli_take_precedence() {
        let config = AppConfig {
            data_dir: PathBuf::from("/srv/shipdesk"),
            order_latency_ms: Some(500),
            ..AppConfig::empty()
        };

        let resolved = apply_defaults(
            config,
            Some(PathBuf::from("/tmp/override")),
            fallback("/fallback"),
            Some(10),
        )
        .unwrap();

        assert_eq!(resolved.data_dir, PathBuf::from("/tmp/override"));
        assert_eq!(resolved.order_latency, Duration::from_millis(10));
    }

    #[test]
    fn test_resolved_paths_live_under_data_dir() {
        let resolved = apply_defaults(AppConfig::empty(), None, fallback("/data"), None).unwrap();

        let paths = resolved.paths();

        assert_eq!(paths.state_dir, PathBuf::from("/data/state"));
        assert_eq!(paths.logs_dir, PathBuf::from("/data/logs"));
    }

    #[test]
    fn test_configured_data_dir_does_not_need_platform_dir() {
        let config = AppConfig {
            data_dir: PathBuf::from("/srv/shipdesk"),
            ..AppConfig::empty()
        };

        let resolved = apply_defaults(config, None, no_platform_dir, None).unwrap();

        assert_eq!(resolved.data_dir, PathBuf::from("/srv/shipdesk"));
    }

    #[test]
    fn test_env_data_dir_does_not_need_platform_dir() {
        let resolved = apply_defaults(
            AppConfig::empty(),
            Some(PathBuf::from("/tmp/override")),
            no_platform_dir,
            None,
        )
        .unwrap();

        assert_eq!(resolved.data_dir, PathBuf::from("/tmp/override"));
    }

    #[test]
    fn test_missing_platform_dir_fails_only_when_needed() {
        let err = apply_defaults(AppConfig::empty(), None, no_platform_dir, None).unwrap_err();

        assert!(err.to_string().contains("platform data directory"));
    }
}

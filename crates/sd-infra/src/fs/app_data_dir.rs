use anyhow::{Context, Result};
use std::path::PathBuf;

/// Environment variable that overrides the data root.
pub const DATA_DIR_ENV: &str = "SHIPDESK_DATA_DIR";

/// Get the ShipDesk application data root directory.
///
/// # Platform-specific Paths
/// - `$SHIPDESK_DATA_DIR` when set
/// - macOS: ~/Library/Application Support/shipdesk
/// - Windows: %APPDATA%\shipdesk
/// - Linux: $XDG_DATA_HOME/shipdesk or ~/.local/share/shipdesk
///
/// This function does not create directories; the caller decides when to.
pub fn app_data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let base_dir =
        get_platform_data_dir().context("Failed to get platform-specific data directory")?;

    Ok(base_dir.join("shipdesk"))
}

fn get_platform_data_dir() -> Result<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        // XDG_DATA_HOME first, then ~/.local/share
        if let Some(xdg_data_home) = std::env::var_os("XDG_DATA_HOME") {
            return Ok(PathBuf::from(xdg_data_home));
        }
    }

    dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Unable to get platform data directory"))
}

//! # Configuration resolution
//!
//! Picks the config file and hands it to the loader. No validation happens
//! here; unknown or missing keys are the loader's business.

use std::path::PathBuf;

use anyhow::Context;
use ws_core::AppConfig;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "WS_CONFIG";

const CONFIG_FILE_NAME: &str = "config.toml";
const APP_DIR_NAME: &str = "wallet-shell";

/// `WS_CONFIG` if set and non-empty, else `<config-dir>/wallet-shell/config.toml`.
pub fn resolve_config_path() -> Option<PathBuf> {
    resolve_config_path_from(std::env::var(CONFIG_PATH_ENV).ok(), dirs::config_dir())
}

fn resolve_config_path_from(
    explicit: Option<String>,
    config_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    match explicit {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => config_dir.map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME)),
    }
}

/// Load the application configuration. A missing file yields the defaults.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let path = resolve_config_path();
    ws_infra::load_config(path.as_deref()).with_context(|| match &path {
        Some(path) => format!("Failed to load config from {}", path.display()),
        None => "Failed to load config from environment".to_string(),
    })
}

//! Application configuration domain model

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// What to do with transitions dispatched by an effect that was started
/// before the latest global reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaleEffectPolicy {
    /// Drop them; the reset wins.
    #[default]
    Discard,
    /// Apply them to the new state anyway.
    Accept,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Profile suffix for the data directory, e.g. `dev` → `wallet-shell-dev`.
    pub profile: Option<String>,

    /// Overrides the platform data directory.
    pub data_dir: Option<PathBuf>,

    /// Localization settings
    pub locale: LocaleConfig,

    /// Policy for effects outliving a reset.
    pub stale_effects: StaleEffectPolicy,

    /// Whether logs are also written to the app logs directory.
    pub log_to_file: bool,
}

/// Localization configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Directory holding `<language>/<namespace>.json` resources.
    pub locales_dir: PathBuf,
    pub fallback_language: String,
    pub default_namespace: String,
    pub namespaces: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: None,
            data_dir: None,
            locale: LocaleConfig::default(),
            stale_effects: StaleEffectPolicy::default(),
            log_to_file: true,
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            locales_dir: PathBuf::from("locales"),
            fallback_language: "it".to_string(),
            default_namespace: "global".to_string(),
            namespaces: vec!["global".to_string(), "onboarding".to_string()],
        }
    }
}

//! # Configuration Loader
//!
//! Layers an optional TOML file under `WS_`-prefixed environment variables and
//! maps the result into [`AppConfig`]. Missing keys take the serde defaults.
//!
//! Nested keys use a double underscore: `WS_LOCALE__FALLBACK_LANGUAGE=en`.

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use thiserror::Error;
use ws_core::config::AppConfig;

pub const ENV_PREFIX: &str = "WS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("config path is not valid UTF-8: {0}")]
    InvalidPath(String),
}

/// Load configuration from `config_path` (if given and present) and the environment.
pub fn load_config(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_config_with_env(config_path, Environment::with_prefix(ENV_PREFIX))
}

fn load_config_with_env(
    config_path: Option<&Path>,
    env: Environment,
) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        let path_str = path
            .to_str()
            .ok_or_else(|| ConfigError::InvalidPath(path.display().to_string()))?;
        builder = builder.add_source(File::new(path_str, FileFormat::Toml).required(false));
    }

    let config = builder
        .add_source(
            env.prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize::<AppConfig>()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;
    use ws_core::config::StaleEffectPolicy;

    fn toml_temp_file() -> NamedTempFile {
        tempfile::Builder::new().suffix(".toml").tempfile().unwrap()
    }

    fn no_env() -> Environment {
        Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::new()))
    }

    /// Test that valid TOML is parsed correctly
    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            profile = "dev"
            data_dir = "/tmp/wallet"
            stale_effects = "accept"
            log_to_file = false

            [locale]
            locales_dir = "/opt/wallet/locales"
            fallback_language = "en"
            namespaces = ["global"]
        "#;

        let mut temp_file = toml_temp_file();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config_with_env(Some(temp_file.path()), no_env()).unwrap();

        assert_eq!(config.profile.as_deref(), Some("dev"));
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/wallet")));
        assert_eq!(config.stale_effects, StaleEffectPolicy::Accept);
        assert!(!config.log_to_file);
        assert_eq!(config.locale.locales_dir, PathBuf::from("/opt/wallet/locales"));
        assert_eq!(config.locale.fallback_language, "en");
        assert_eq!(config.locale.default_namespace, "global");
        assert_eq!(config.locale.namespaces, vec!["global".to_string()]);
    }

    /// Test that a missing file yields defaults
    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let config =
            load_config_with_env(Some(&dir.path().join("absent.toml")), no_env()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    /// Test that environment variables override the file
    #[test]
    fn test_environment_overrides_file() {
        let mut temp_file = toml_temp_file();
        temp_file
            .write_all(b"stale_effects = \"accept\"\n[locale]\nfallback_language = \"it\"\n")
            .unwrap();

        let env = Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::from([
            ("WS_STALE_EFFECTS".to_string(), "discard".to_string()),
            ("WS_LOCALE__FALLBACK_LANGUAGE".to_string(), "en".to_string()),
        ])));

        let config = load_config_with_env(Some(temp_file.path()), env).unwrap();
        assert_eq!(config.stale_effects, StaleEffectPolicy::Discard);
        assert_eq!(config.locale.fallback_language, "en");
    }
}

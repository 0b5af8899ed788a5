use std::path::PathBuf;

use ws_core::AppConfig;

const APP_DIR_NAME: &str = "wallet-shell";

/// Resolved on-disk layout of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDirs {
    pub app_data_root: PathBuf,
    pub app_log_dir: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,
}

fn resolved_app_dir_name(profile: Option<&str>) -> String {
    match profile {
        Some(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

#[derive(Default)]
pub struct DirsAppDirsAdapter {
    base_data_local_dir_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_base_data_local_dir(base: PathBuf) -> Self {
        Self {
            base_data_local_dir_override: Some(base),
        }
    }

    /// The override if set, `dirs::data_local_dir()` otherwise.
    pub fn base_data_local_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_data_local_dir_override {
            return Some(base.clone());
        }
        dirs::data_local_dir()
    }

    /// Resolve the application directories for `config`.
    ///
    /// An explicit `data_dir` wins over the platform default; otherwise the
    /// root is `<data-local>/wallet-shell[-<profile>]`.
    pub fn get_app_dirs(&self, config: &AppConfig) -> Result<AppDirs, AppDirsError> {
        let app_data_root = match &config.data_dir {
            Some(dir) => dir.clone(),
            None => self
                .base_data_local_dir()
                .ok_or(AppDirsError::DataLocalDirUnavailable)?
                .join(resolved_app_dir_name(config.profile.as_deref())),
        };

        Ok(AppDirs {
            app_log_dir: app_data_root.join("logs"),
            app_data_root,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(profile: Option<&str>) -> AppConfig {
        AppConfig {
            profile: profile.map(str::to_string),
            ..AppConfig::default()
        }
    }

    #[test]
    fn adapter_appends_app_dir_name() {
        let adapter = DirsAppDirsAdapter::with_base_data_local_dir(PathBuf::from("/tmp"));
        let dirs = adapter.get_app_dirs(&config(None)).unwrap();
        assert_eq!(dirs.app_data_root, PathBuf::from("/tmp/wallet-shell"));
        assert_eq!(dirs.app_log_dir, PathBuf::from("/tmp/wallet-shell/logs"));
    }

    #[test]
    fn adapter_isolates_dirs_for_different_profiles() {
        let adapter = DirsAppDirsAdapter::with_base_data_local_dir(PathBuf::from("/tmp"));
        let dirs_a = adapter.get_app_dirs(&config(Some("a"))).unwrap();
        let dirs_b = adapter.get_app_dirs(&config(Some("b"))).unwrap();

        assert_eq!(dirs_a.app_data_root, PathBuf::from("/tmp/wallet-shell-a"));
        assert_eq!(dirs_b.app_data_root, PathBuf::from("/tmp/wallet-shell-b"));
    }

    #[test]
    fn empty_profile_is_ignored() {
        let adapter = DirsAppDirsAdapter::with_base_data_local_dir(PathBuf::from("/tmp"));
        let dirs = adapter.get_app_dirs(&config(Some(""))).unwrap();
        assert_eq!(dirs.app_data_root, PathBuf::from("/tmp/wallet-shell"));
    }

    #[test]
    fn explicit_data_dir_wins() {
        let adapter = DirsAppDirsAdapter::with_base_data_local_dir(PathBuf::from("/tmp"));
        let config = AppConfig {
            profile: Some("a".into()),
            data_dir: Some(PathBuf::from("/srv/wallet")),
            ..AppConfig::default()
        };
        let dirs = adapter.get_app_dirs(&config).unwrap();
        assert_eq!(dirs.app_data_root, PathBuf::from("/srv/wallet"));
    }
}

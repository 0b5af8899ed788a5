//! Platform capability detection for secure storage.
//!
//! Decides whether the persisted state can live in the system keychain or
//! has to fall back to owner-only files under the application data root.

/// Secure storage capability of the current platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecureStorageCapability {
    /// macOS Keychain, Windows Credential Manager, Linux Secret Service
    SystemKeyring,
    /// WSL or headless Linux
    FileBasedKeystore,
    Unsupported,
}

/// Detect the secure storage capability of the current platform.
///
/// - **macOS**, **Windows**: `SystemKeyring`
/// - **Linux**: `FileBasedKeystore` under WSL or without a desktop session,
///   `SystemKeyring` otherwise
/// - **Other**: `Unsupported`
pub fn detect_storage_capability() -> SecureStorageCapability {
    #[cfg(any(target_os = "macos", target_os = "windows"))]
    {
        return SecureStorageCapability::SystemKeyring;
    }

    #[cfg(target_os = "linux")]
    {
        if is_wsl() {
            log::warn!("WSL environment detected, falling back to file-based secure storage");
            return SecureStorageCapability::FileBasedKeystore;
        }

        if has_desktop_environment() {
            log::info!("Linux desktop session detected, using system keyring");
            return SecureStorageCapability::SystemKeyring;
        }

        log::warn!("No desktop session detected, falling back to file-based secure storage");
        SecureStorageCapability::FileBasedKeystore
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
    {
        log::error!("Unsupported platform for secure storage");
        SecureStorageCapability::Unsupported
    }
}

/// `/proc/version` mentions Microsoft/WSL, or a WSL env var is set.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn is_wsl() -> bool {
    if let Ok(version) = std::fs::read_to_string("/proc/version") {
        if version.contains("Microsoft") || version.contains("WSL") {
            return true;
        }
    }

    std::env::var("WSL_DISTRO_NAME").is_ok() || std::env::var("WSL_INTEROP").is_ok()
}

/// Keyring daemons need both a display server and a D-Bus session bus.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn has_desktop_environment() -> bool {
    std::env::var("DISPLAY").is_ok() && std::env::var("DBUS_SESSION_BUS_ADDRESS").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    struct EnvSnapshot(Vec<(&'static str, Option<String>)>);

    impl EnvSnapshot {
        fn take(keys: &[&'static str]) -> Self {
            Self(keys.iter().map(|k| (*k, std::env::var(k).ok())).collect())
        }
    }

    impl Drop for EnvSnapshot {
        fn drop(&mut self) {
            for (key, value) in &self.0 {
                match value {
                    Some(v) => std::env::set_var(key, v),
                    None => std::env::remove_var(key),
                }
            }
        }
    }

    #[test]
    fn desktop_environment_requires_display_and_dbus() {
        let _lock = env_lock();
        let _snapshot = EnvSnapshot::take(&["DISPLAY", "DBUS_SESSION_BUS_ADDRESS"]);

        std::env::set_var("DISPLAY", ":0");
        std::env::remove_var("DBUS_SESSION_BUS_ADDRESS");
        assert!(!has_desktop_environment());

        std::env::set_var("DBUS_SESSION_BUS_ADDRESS", "unix:path=/run/user/1000/bus");
        assert!(has_desktop_environment());

        std::env::remove_var("DISPLAY");
        assert!(!has_desktop_environment());
    }

    #[test]
    fn wsl_env_var_is_detected() {
        let _lock = env_lock();
        let _snapshot = EnvSnapshot::take(&["WSL_DISTRO_NAME", "WSL_INTEROP"]);

        std::env::set_var("WSL_DISTRO_NAME", "Ubuntu");
        assert!(is_wsl());
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn headless_linux_falls_back_to_files() {
        let _lock = env_lock();
        let _snapshot = EnvSnapshot::take(&[
            "WSL_DISTRO_NAME",
            "WSL_INTEROP",
            "DISPLAY",
            "DBUS_SESSION_BUS_ADDRESS",
        ]);
        std::env::remove_var("WSL_DISTRO_NAME");
        std::env::remove_var("WSL_INTEROP");
        std::env::remove_var("DISPLAY");
        std::env::remove_var("DBUS_SESSION_BUS_ADDRESS");

        assert_eq!(
            detect_storage_capability(),
            SecureStorageCapability::FileBasedKeystore
        );
    }
}

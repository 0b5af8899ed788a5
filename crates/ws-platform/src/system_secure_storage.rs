//! Keychain-backed secure storage.
//!
//! Every key becomes one credential under a per-profile service, so two
//! profiles on the same account never read each other's secrets.

use keyring::Entry;
use ws_core::ports::{SecureStorageError, SecureStoragePort};

const SERVICE_BASE: &str = "WalletShell";

/// Keychain service for `profile`: `WalletShell` or `WalletShell-<profile>`.
pub fn service_name(profile: Option<&str>) -> String {
    match profile {
        Some(profile) if !profile.is_empty() => format!("{SERVICE_BASE}-{profile}"),
        _ => SERVICE_BASE.to_string(),
    }
}

/// Which keychain call failed, for error messages.
#[derive(Debug, Clone, Copy)]
enum Operation {
    Read,
    Write,
    Delete,
}

impl Operation {
    fn verb(self) -> &'static str {
        match self {
            Operation::Read => "read",
            Operation::Write => "write",
            Operation::Delete => "delete",
        }
    }
}

fn classify(service: &str, key: &str, op: Operation, err: keyring::Error) -> SecureStorageError {
    log::warn!("Keychain {} of {service}/{key} failed: {err}", op.verb());
    match err {
        keyring::Error::PlatformFailure(cause) => {
            SecureStorageError::PermissionDenied(cause.to_string())
        }
        keyring::Error::NoStorageAccess(cause) => SecureStorageError::Unavailable(cause.to_string()),
        other => SecureStorageError::Other(format!(
            "keychain {} of {key} failed: {other}",
            op.verb()
        )),
    }
}

/// 基于系统钥匙串的安全存储（按 profile 隔离）。
#[derive(Debug, Clone)]
pub struct SystemSecureStorage {
    service: String,
}

impl SystemSecureStorage {
    pub fn for_profile(profile: Option<&str>) -> Self {
        Self {
            service: service_name(profile),
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    fn entry(&self, key: &str) -> Result<Entry, SecureStorageError> {
        Entry::new(&self.service, key).map_err(|err| {
            SecureStorageError::Other(format!("invalid keychain entry {key}: {err}"))
        })
    }
}

impl SecureStoragePort for SystemSecureStorage {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, SecureStorageError> {
        match self.entry(key)?.get_secret() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => {
                log::debug!("No keychain entry {}/{key}", self.service);
                Ok(None)
            }
            Err(err) => Err(classify(&self.service, key, Operation::Read, err)),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), SecureStorageError> {
        self.entry(key)?
            .set_secret(value)
            .map_err(|err| classify(&self.service, key, Operation::Write, err))
    }

    fn delete(&self, key: &str) -> Result<(), SecureStorageError> {
        match self.entry(key)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(classify(&self.service, key, Operation::Delete, err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_is_scoped_by_profile() {
        assert_eq!(service_name(None), "WalletShell");
        assert_eq!(service_name(Some("")), "WalletShell");
        assert_eq!(service_name(Some("qa")), "WalletShell-qa");
        assert_eq!(
            SystemSecureStorage::for_profile(Some("qa")).service(),
            "WalletShell-qa"
        );
    }

    #[test]
    fn platform_failures_map_to_permission_denied() {
        let err = classify(
            "WalletShell",
            "identification:pin",
            Operation::Read,
            keyring::Error::PlatformFailure("locked".into()),
        );
        assert!(matches!(err, SecureStorageError::PermissionDenied(msg) if msg == "locked"));

        let err = classify(
            "WalletShell",
            "identification:pin",
            Operation::Write,
            keyring::Error::NoStorageAccess("no daemon".into()),
        );
        assert!(matches!(err, SecureStorageError::Unavailable(_)));

        let err = classify(
            "WalletShell",
            "identification:pin",
            Operation::Delete,
            keyring::Error::TooLong("key".into(), 255),
        );
        assert!(matches!(err, SecureStorageError::Other(msg) if msg.contains("delete")));
    }
}

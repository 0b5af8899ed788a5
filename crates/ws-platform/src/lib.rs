//! # ws-platform
//!
//! Platform-specific implementations for Wallet Shell.
//!
//! This crate contains the adapters that talk to the operating system: the
//! keychain-backed secure storage, its file fallback, and the application
//! directory layout.

pub mod app_dirs;
pub mod capability;
pub mod file_secure_storage;
pub mod secure_kv;
pub mod secure_storage;
pub mod system_secure_storage;

pub use app_dirs::{AppDirs, AppDirsError, DirsAppDirsAdapter};
pub use capability::{detect_storage_capability, SecureStorageCapability};
pub use file_secure_storage::FileSecureStorage;
pub use secure_kv::SecureKeyValueStorage;
pub use secure_storage::{create_secure_storage, SecureStorageFactoryError};
pub use system_secure_storage::SystemSecureStorage;

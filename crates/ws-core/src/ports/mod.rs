//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (store, listeners,
//! orchestrator) and infrastructure implementations. Concrete adapters live in
//! `ws-infra` and `ws-platform`.

pub mod bootstrap;
pub mod navigator;
pub mod secure_storage;
pub mod storage;

pub use bootstrap::{BootstrapError, BootstrapInitializerPort};
pub use navigator::{NavigatorError, NavigatorPort};
pub use secure_storage::{SecureStorageError, SecureStoragePort};
pub use storage::{
    decode_storage_key, encode_storage_key, KeyValueStorageError, KeyValueStoragePort,
};

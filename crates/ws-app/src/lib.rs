//! Wallet Shell Application Orchestration Layer
//!
//! This crate owns the state store, the listener middleware that runs
//! asynchronous effects after each commit, and the use cases that connect the
//! store to navigation, persistence and debug tooling.

pub mod listeners;
pub mod store;
pub mod usecases;

pub use store::{
    is_any_of, Effect, ListenerApi, ListenerMiddleware, Store, StoreBuilder, StoreError,
};

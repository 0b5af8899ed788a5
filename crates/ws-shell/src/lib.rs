//! # ws-shell
//!
//! Process bootstrap for Wallet Shell: tracing, configuration, dependency
//! wiring and the run loop.

pub mod bootstrap;

pub use bootstrap::run::run_app;

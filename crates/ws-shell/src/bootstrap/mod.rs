//! Bootstrap module - application initialization and wiring.
//!
//! - [`config`] resolves and loads [`ws_core::AppConfig`]
//! - [`tracing`] installs the global subscriber
//! - [`wiring`] builds the store, listeners and background tasks
//! - [`run`] drives the process until shutdown

pub mod config;
pub mod navigator;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{load_app_config, resolve_config_path};
pub use navigator::LoggingNavigator;
pub use wiring::{wire_dependencies, AppRuntime};

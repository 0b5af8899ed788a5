//! Effects registered on the listener middleware.

pub mod startup;

pub use startup::{add_startup_listeners, StartupBootstrap};

//! # ws-core
//!
//! Core domain models and the application lifecycle state machine for Wallet Shell.
//!
//! This crate contains pure state transitions without any infrastructure dependencies:
//! the four state slices and their reducers, the reset broadcast, the root screen
//! derivation and the PIN validation policy. Side effects live behind the traits in
//! [`ports`].

pub mod config;
pub mod debug;
pub mod identification;
pub mod ids;
pub mod navigation;
pub mod persistence;
pub mod pin;
pub mod ports;
pub mod preferences;
pub mod startup;
pub mod store;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use ids::SessionId;
pub use navigation::{derive_root_screen, RootRoute, RootScreen};
pub use pin::{is_valid_pin, PinInput, PIN_LENGTH};
pub use store::{Action, AppState, Broadcast};

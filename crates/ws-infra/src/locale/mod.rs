//! Localization resources.
//!
//! The locale bootstrap is the initializer run by the startup effect: it loads
//! every configured namespace for the fallback language into a shared
//! [`LocaleCatalog`].

mod bootstrap;
mod catalog;

pub use bootstrap::LocaleBootstrap;
pub use catalog::LocaleCatalog;

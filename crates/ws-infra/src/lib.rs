pub mod config;
pub mod locale;
pub mod storage;

pub use config::load_config;
pub use locale::{LocaleBootstrap, LocaleCatalog};
pub use storage::{FileKeyValueStorage, InMemoryKeyValueStorage};

//! Plain key-value storage adapters.

mod file_kv;
mod memory;

pub use file_kv::{FileKeyValueStorage, DEFAULT_STORAGE_DIR};
pub use memory::InMemoryKeyValueStorage;

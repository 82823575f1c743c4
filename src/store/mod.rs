pub mod json_store;
pub mod kv;

pub use json_store::JsonFileStore;
pub use kv::{KvStore, MemoryStore, StoreError};

pub mod kv;
pub mod models;
pub mod store;

pub use kv::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};
pub use models::{CommandProfile, Method, ProfileError, RequestShape};
pub use store::{ProfileStore, StoreError};

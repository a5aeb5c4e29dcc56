//! Storage Adapter - 本地键值存储

mod file_key_value_store;

pub use file_key_value_store::FileKeyValueStore;

//! Memory Layer - In-Memory Stores
//!
//! 键值存储和分享存储的内存实现，用于测试和无持久化运行

mod key_value_store;
mod shared_book_store;

pub use key_value_store::InMemoryKeyValueStore;
pub use shared_book_store::InMemorySharedBookStore;

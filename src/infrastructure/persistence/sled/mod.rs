//! Sled 存储实现

mod shared_book_store;

pub use shared_book_store::{SledSharedBookStore, SledSharedBookStoreConfig};

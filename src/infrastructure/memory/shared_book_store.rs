//! In-Memory Shared Book Store Implementation

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::ports::{RemoteBookStorePort, RemoteStoreError};
use crate::domain::book::Book;

/// 内存分享存储
pub struct InMemorySharedBookStore {
    books: DashMap<String, Book>,
}

impl InMemorySharedBookStore {
    pub fn new() -> Self {
        Self {
            books: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for InMemorySharedBookStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RemoteBookStorePort for InMemorySharedBookStore {
    async fn create(&self, book: &Book) -> Result<String, RemoteStoreError> {
        let remote_id = Uuid::new_v4().to_string();
        self.books.insert(remote_id.clone(), book.clone());
        tracing::debug!(remote_id = %remote_id, "Shared book stored");
        Ok(remote_id)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Book>, RemoteStoreError> {
        Ok(self.books.get(id).map(|b| b.clone()))
    }

    async fn update(&self, id: &str, book: &Book) -> Result<(), RemoteStoreError> {
        let mut entry = self
            .books
            .get_mut(id)
            .ok_or_else(|| RemoteStoreError::NotFound(id.to_string()))?;
        *entry = book.clone();
        Ok(())
    }
}

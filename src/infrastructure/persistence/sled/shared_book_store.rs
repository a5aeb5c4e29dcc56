//! Sled-based Shared Book Store Implementation
//!
//! 服务端分享副本存储，key 为 `book:{remote_id}`

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sled::Db;
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::ports::{RemoteBookStorePort, RemoteStoreError};
use crate::domain::book::Book;

/// Sled 分享存储配置
#[derive(Debug, Clone)]
pub struct SledSharedBookStoreConfig {
    /// 数据库路径
    pub db_path: String,
}

impl Default for SledSharedBookStoreConfig {
    fn default() -> Self {
        Self {
            db_path: "data/shared.sled".to_string(),
        }
    }
}

/// 内部存储条目
///
/// Book 以 JSON 保存：其 serde 表示依赖 skip_serializing_if，bincode 无法往返
#[derive(Debug, Clone, Serialize, Deserialize)]
struct InternalSharedEntry {
    book_json: String,
    created_at: i64,
    updated_at: i64,
}

/// Sled 分享存储
pub struct SledSharedBookStore {
    db: Db,
}

impl SledSharedBookStore {
    /// 创建新的存储实例
    pub fn new(config: &SledSharedBookStoreConfig) -> Result<Self, RemoteStoreError> {
        let db = sled::open(&config.db_path)
            .map_err(|e| RemoteStoreError::DatabaseError(e.to_string()))?;

        tracing::info!(
            db_path = %config.db_path,
            books = db.scan_prefix("book:").count(),
            "SledSharedBookStore initialized"
        );

        Ok(Self { db })
    }

    /// 打开现有存储
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RemoteStoreError> {
        let config = SledSharedBookStoreConfig {
            db_path: path.as_ref().to_string_lossy().to_string(),
        };
        Self::new(&config)
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 刷新数据库
    pub fn flush(&self) -> Result<(), RemoteStoreError> {
        self.db
            .flush()
            .map_err(|e| RemoteStoreError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    fn key(remote_id: &str) -> String {
        format!("book:{}", remote_id)
    }

    fn read_entry(&self, key: &str) -> Result<Option<InternalSharedEntry>, RemoteStoreError> {
        match self.db.get(key) {
            Ok(Some(data)) => {
                let entry: InternalSharedEntry = bincode::deserialize(&data)
                    .map_err(|e| RemoteStoreError::SerializationError(e.to_string()))?;
                Ok(Some(entry))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(RemoteStoreError::DatabaseError(e.to_string())),
        }
    }

    fn write_entry(&self, key: &str, entry: &InternalSharedEntry) -> Result<(), RemoteStoreError> {
        let entry_bytes = bincode::serialize(entry)
            .map_err(|e| RemoteStoreError::SerializationError(e.to_string()))?;
        self.db
            .insert(key, entry_bytes)
            .map_err(|e| RemoteStoreError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    fn encode_book(book: &Book) -> Result<String, RemoteStoreError> {
        serde_json::to_string(book).map_err(|e| RemoteStoreError::SerializationError(e.to_string()))
    }
}

#[async_trait]
impl RemoteBookStorePort for SledSharedBookStore {
    async fn create(&self, book: &Book) -> Result<String, RemoteStoreError> {
        let remote_id = Uuid::new_v4().to_string();
        let now = Utc::now().timestamp_millis();

        let entry = InternalSharedEntry {
            book_json: Self::encode_book(book)?,
            created_at: now,
            updated_at: now,
        };
        self.write_entry(&Self::key(&remote_id), &entry)?;

        tracing::debug!(remote_id = %remote_id, size = entry.book_json.len(), "Shared book stored");
        Ok(remote_id)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Book>, RemoteStoreError> {
        let Some(entry) = self.read_entry(&Self::key(id))? else {
            return Ok(None);
        };

        let book = serde_json::from_str(&entry.book_json)
            .map_err(|e| RemoteStoreError::SerializationError(e.to_string()))?;
        Ok(Some(book))
    }

    async fn update(&self, id: &str, book: &Book) -> Result<(), RemoteStoreError> {
        let key = Self::key(id);
        let mut entry = self
            .read_entry(&key)?
            .ok_or_else(|| RemoteStoreError::NotFound(id.to_string()))?;

        entry.book_json = Self::encode_book(book)?;
        entry.updated_at = Utc::now().timestamp_millis();
        self.write_entry(&key, &entry)?;

        tracing::debug!(remote_id = %id, "Shared book replaced");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::{BookId, Page, PageId};
    use tempfile::tempdir;

    fn book() -> Book {
        Book::new(
            BookId::from("local-1"),
            "Garden",
            vec![Page::new(PageId::from("p1"), "A seed", "https://img.example/seed.png")],
        )
        .with_remote_id("old")
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let dir = tempdir().unwrap();
        let store = SledSharedBookStore::open(dir.path().join("shared.sled")).unwrap();

        let id = store.create(&book()).await.unwrap();
        let found = store.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found, book());

        assert!(store.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_existing_and_missing() {
        let dir = tempdir().unwrap();
        let store = SledSharedBookStore::open(dir.path().join("shared.sled")).unwrap();

        let id = store.create(&book()).await.unwrap();
        let renamed = book().with_content("Garden, later", vec![]);
        store.update(&id, &renamed).await.unwrap();

        let found = store.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.title(), "Garden, later");
        assert_eq!(found.page_count(), 0);

        let err = store.update("nope", &renamed).await.unwrap_err();
        assert!(matches!(err, RemoteStoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shared.sled");

        let id = {
            let store = SledSharedBookStore::open(&path).unwrap();
            let id = store.create(&book()).await.unwrap();
            store.flush().unwrap();
            id
        };

        let store = SledSharedBookStore::open(&path).unwrap();
        assert!(store.find_by_id(&id).await.unwrap().is_some());
    }
}

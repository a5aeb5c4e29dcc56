//! Remote Book Store Port - 在线分享存储
//!
//! key -> Book，服务端分配 id。
//! 服务端用 sled 实现，客户端用 HTTP 实现

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::book::Book;

/// 远端存储错误
#[derive(Debug, Error)]
pub enum RemoteStoreError {
    #[error("Shared book not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Remote Book Store Port
#[async_trait]
pub trait RemoteBookStorePort: Send + Sync {
    /// 保存一份副本，返回新分配的 id
    async fn create(&self, book: &Book) -> Result<String, RemoteStoreError>;

    /// 按 id 获取副本
    async fn find_by_id(&self, id: &str) -> Result<Option<Book>, RemoteStoreError>;

    /// 覆盖已有副本，不存在时返回 NotFound
    async fn update(&self, id: &str, book: &Book) -> Result<(), RemoteStoreError>;
}

//! Key-Value Store Port - 本地键值存储
//!
//! 绘本库以单个 JSON 字符串存放在固定 key 下，
//! 具体实现在 infrastructure 层（文件、内存）

use async_trait::async_trait;
use thiserror::Error;

/// 键值存储错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Backend error: {0}")]
    BackendError(String),
}

/// Key-Value Store Port
#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// 读取 key 对应的值，不存在时返回 None
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// 写入（覆盖）key 对应的值
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
}

//! File Key-Value Store - 文件系统键值存储实现
//!
//! 每个 key 对应 `{base_dir}/{key}.json`，实现 KeyValueStorePort trait

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{KeyValueStorePort, StoreError};

/// 文件系统键值存储
pub struct FileKeyValueStore {
    /// 存储根目录
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    /// 创建新的文件存储
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        // 确保目录存在
        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| StoreError::IoError(e.to_string()))?;

        tracing::info!(base_dir = %base_dir.display(), "FileKeyValueStore initialized");

        Ok(Self { base_dir })
    }

    /// 获取存储根目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// key 只允许字母、数字、`-`、`_`、`.`，且不能以 `.` 开头
    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }

        Ok(self.base_dir.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::IoError(e.to_string())),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");

        // 先写临时文件再替换
        fs::write(&tmp_path, value.as_bytes())
            .await
            .map_err(|e| StoreError::IoError(e.to_string()))?;
        fs::rename(&tmp_path, &path)
            .await
            .map_err(|e| StoreError::IoError(e.to_string()))?;

        tracing::debug!(key = %key, size = value.len(), "Value written");
        Ok(())
    }
}

//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{
    ImageGenerationError, RemoteStoreError, StoreError, TranscriptionError,
};
use crate::domain::book::BookError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 本地存储错误
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 远端仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 外部服务错误
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<StoreError> for ApplicationError {
    fn from(err: StoreError) -> Self {
        Self::StorageError(err.to_string())
    }
}

impl From<RemoteStoreError> for ApplicationError {
    fn from(err: RemoteStoreError) -> Self {
        match err {
            RemoteStoreError::NotFound(id) => Self::not_found("Shared book", id),
            RemoteStoreError::NetworkError(msg) | RemoteStoreError::ServiceError(msg) => {
                Self::ExternalServiceError(msg)
            }
            other => Self::RepositoryError(other.to_string()),
        }
    }
}

impl From<TranscriptionError> for ApplicationError {
    fn from(err: TranscriptionError) -> Self {
        match err {
            TranscriptionError::InvalidAudio(msg) => Self::ValidationError(msg),
            other => Self::ExternalServiceError(other.to_string()),
        }
    }
}

impl From<ImageGenerationError> for ApplicationError {
    fn from(err: ImageGenerationError) -> Self {
        match err {
            ImageGenerationError::EmptyPrompt => Self::ValidationError(err.to_string()),
            other => Self::ExternalServiceError(other.to_string()),
        }
    }
}

impl From<BookError> for ApplicationError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::NotFound(id) => Self::not_found("Book", id.to_string()),
            BookError::InvalidId(_) => Self::ValidationError(err.to_string()),
        }
    }
}

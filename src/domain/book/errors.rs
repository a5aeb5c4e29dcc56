//! Book Context - Errors

use thiserror::Error;

use super::BookId;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("绘本不存在: {0}")]
    NotFound(BookId),

    #[error("无效的绘本 ID: {0:?}")]
    InvalidId(String),
}

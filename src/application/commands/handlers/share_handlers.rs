//! Share Command Handlers - 服务端分享存储

use std::sync::Arc;

use crate::application::commands::{PublishSharedBook, UpdateSharedBook};
use crate::application::error::ApplicationError;
use crate::application::ports::RemoteBookStorePort;

/// 发布/更新响应
#[derive(Debug, Clone)]
pub struct SharedBookResponse {
    pub remote_id: String,
}

/// PublishSharedBook Handler
pub struct PublishSharedBookHandler {
    store: Arc<dyn RemoteBookStorePort>,
}

impl PublishSharedBookHandler {
    pub fn new(store: Arc<dyn RemoteBookStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        command: PublishSharedBook,
    ) -> Result<SharedBookResponse, ApplicationError> {
        let remote_id = self.store.create(&command.book).await?;

        tracing::info!(
            remote_id = %remote_id,
            book_id = %command.book.id(),
            pages = command.book.page_count(),
            "Shared book published"
        );

        Ok(SharedBookResponse { remote_id })
    }
}

/// UpdateSharedBook Handler
pub struct UpdateSharedBookHandler {
    store: Arc<dyn RemoteBookStorePort>,
}

impl UpdateSharedBookHandler {
    pub fn new(store: Arc<dyn RemoteBookStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        command: UpdateSharedBook,
    ) -> Result<SharedBookResponse, ApplicationError> {
        if command.remote_id.trim().is_empty() {
            return Err(ApplicationError::validation("Shared book id is required"));
        }

        self.store.update(&command.remote_id, &command.book).await?;

        tracing::info!(remote_id = %command.remote_id, "Shared book updated");

        Ok(SharedBookResponse {
            remote_id: command.remote_id,
        })
    }
}

//! Book Command Handlers - 本地绘本库

use std::sync::Arc;

use crate::application::commands::{DeleteBook, SaveBook, ShareBook};
use crate::application::error::ApplicationError;
use crate::application::library::BookLibrary;
use crate::application::ports::RemoteBookStorePort;
use crate::domain::book::{Book, BookId};

/// 分享链接：`{public_base_url}/share/{remote_id}`
pub fn share_url(public_base_url: &str, remote_id: &str) -> String {
    format!("{}/share/{}", public_base_url.trim_end_matches('/'), remote_id)
}

// ============================================================================
// SaveBook
// ============================================================================

/// 保存响应
#[derive(Debug, Clone)]
pub struct SaveBookResponse {
    pub book: Book,
    /// 已分享的绘本是否成功同步到远端；未分享时为 false
    pub remote_synced: bool,
}

/// SaveBook Handler
///
/// 草稿经保存变换后写入本地库；已分享的绘本同时更新远端副本，
/// 远端失败只记录日志
pub struct SaveBookHandler {
    library: BookLibrary,
    remote: Option<Arc<dyn RemoteBookStorePort>>,
}

impl SaveBookHandler {
    pub fn new(library: BookLibrary, remote: Option<Arc<dyn RemoteBookStorePort>>) -> Self {
        Self { library, remote }
    }

    pub async fn handle(&self, command: SaveBook) -> Result<SaveBookResponse, ApplicationError> {
        let book = command.draft.to_book(&command.base);
        self.library.upsert_book(book.clone()).await?;

        tracing::info!(
            book_id = %book.id(),
            pages = book.page_count(),
            "Book saved"
        );

        let mut remote_synced = false;
        if let (Some(remote_id), Some(remote)) = (book.remote_id(), &self.remote) {
            match remote.update(remote_id, &book).await {
                Ok(()) => {
                    remote_synced = true;
                    tracing::debug!(book_id = %book.id(), remote_id = %remote_id, "Shared copy updated");
                }
                Err(e) => {
                    tracing::error!(
                        book_id = %book.id(),
                        remote_id = %remote_id,
                        error = %e,
                        "Failed to update shared copy"
                    );
                }
            }
        }

        Ok(SaveBookResponse {
            book,
            remote_synced,
        })
    }
}

// ============================================================================
// DeleteBook
// ============================================================================

/// DeleteBook Handler
pub struct DeleteBookHandler {
    library: BookLibrary,
}

impl DeleteBookHandler {
    pub fn new(library: BookLibrary) -> Self {
        Self { library }
    }

    pub async fn handle(&self, command: DeleteBook) -> Result<(), ApplicationError> {
        if !self.library.delete_book(&command.book_id).await? {
            return Err(ApplicationError::not_found("Book", command.book_id.to_string()));
        }

        tracing::info!(book_id = %command.book_id, "Book deleted");
        Ok(())
    }
}

// ============================================================================
// ShareBook
// ============================================================================

/// 分享响应
#[derive(Debug, Clone)]
pub struct ShareBookResponse {
    pub book_id: BookId,
    pub remote_id: String,
    pub share_url: String,
}

/// ShareBook Handler
///
/// 首次分享创建远端副本并回写 remote_id；已分享的绘本复用原 id
pub struct ShareBookHandler {
    library: BookLibrary,
    remote: Arc<dyn RemoteBookStorePort>,
    public_base_url: String,
}

impl ShareBookHandler {
    pub fn new(
        library: BookLibrary,
        remote: Arc<dyn RemoteBookStorePort>,
        public_base_url: impl Into<String>,
    ) -> Self {
        Self {
            library,
            remote,
            public_base_url: public_base_url.into(),
        }
    }

    pub async fn handle(&self, command: ShareBook) -> Result<ShareBookResponse, ApplicationError> {
        let book = self
            .library
            .get_book(&command.book_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Book", command.book_id.to_string()))?;

        let remote_id = match book.remote_id() {
            Some(existing) => {
                self.remote.update(existing, &book).await?;
                existing.to_string()
            }
            None => {
                let remote_id = self.remote.create(&book).await?;
                self.library
                    .upsert_book(book.clone().with_remote_id(remote_id.clone()))
                    .await?;
                remote_id
            }
        };

        let url = share_url(&self.public_base_url, &remote_id);

        tracing::info!(
            book_id = %command.book_id,
            remote_id = %remote_id,
            share_url = %url,
            "Book shared"
        );

        Ok(ShareBookResponse {
            book_id: command.book_id,
            remote_id,
            share_url: url,
        })
    }
}

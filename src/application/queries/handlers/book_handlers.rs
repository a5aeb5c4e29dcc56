//! Book Query Handlers

use crate::application::error::ApplicationError;
use crate::application::library::BookLibrary;
use crate::application::queries::{GetBook, ListBooks, OpenEditor};
use crate::domain::book::Book;
use crate::domain::editor::EditorState;

/// ListBooks Handler
pub struct ListBooksHandler {
    library: BookLibrary,
}

impl ListBooksHandler {
    pub fn new(library: BookLibrary) -> Self {
        Self { library }
    }

    pub async fn handle(&self, _query: ListBooks) -> Result<Vec<Book>, ApplicationError> {
        let books = self.library.get_books().await?;
        Ok(books)
    }
}

/// GetBook Handler
pub struct GetBookHandler {
    library: BookLibrary,
}

impl GetBookHandler {
    pub fn new(library: BookLibrary) -> Self {
        Self { library }
    }

    pub async fn handle(&self, query: GetBook) -> Result<Book, ApplicationError> {
        self.library
            .get_book(&query.book_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Book", query.book_id.to_string()))
    }
}

/// 打开编辑器响应
#[derive(Debug, Clone)]
pub struct OpenEditorResponse {
    /// 编辑基准（保存时保留其 id / created_at / remote_id）
    pub book: Book,
    pub state: EditorState,
}

/// OpenEditor Handler
///
/// 指定 id 时加载已有绘本，否则新建空白绘本（保存前不落库）
pub struct OpenEditorHandler {
    library: BookLibrary,
}

impl OpenEditorHandler {
    pub fn new(library: BookLibrary) -> Self {
        Self { library }
    }

    pub async fn handle(&self, query: OpenEditor) -> Result<OpenEditorResponse, ApplicationError> {
        let book = match query.book_id {
            Some(book_id) => self
                .library
                .get_book(&book_id)
                .await?
                .ok_or_else(|| ApplicationError::not_found("Book", book_id.to_string()))?,
            None => Book::new_empty(),
        };

        let state = EditorState::from_book(&book, query.page_index);

        tracing::debug!(
            book_id = %book.id(),
            page_index = state.page_index(),
            pages = state.page_count(),
            "Editor opened"
        );

        Ok(OpenEditorResponse { book, state })
    }
}

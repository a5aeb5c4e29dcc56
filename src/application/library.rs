//! Book Library - 本地绘本库
//!
//! 所有绘本以一个 JSON 数组存放在固定 key 下。
//! 库为空时返回示例绘本；数据损坏时视为空库，不向上报错

use std::sync::Arc;

use crate::application::ports::{KeyValueStorePort, StoreError};
use crate::domain::book::{example_book, Book, BookId};

/// 绘本库在键值存储中的 key
pub const STORAGE_KEY: &str = "tiny-tales";

/// 本地绘本库
#[derive(Clone)]
pub struct BookLibrary {
    store: Arc<dyn KeyValueStorePort>,
}

impl BookLibrary {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }

    /// 读取全部绘本
    ///
    /// 库为空时返回只含示例绘本的列表
    pub async fn get_books(&self) -> Result<Vec<Book>, StoreError> {
        let books = self.load_stored().await?;
        if books.is_empty() {
            return Ok(vec![example_book()]);
        }
        Ok(books)
    }

    async fn load_stored(&self) -> Result<Vec<Book>, StoreError> {
        let Some(blob) = self.store.get(STORAGE_KEY).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Book>>(&blob) {
            Ok(books) => Ok(books),
            Err(e) => {
                tracing::warn!(error = %e, "Stored books are malformed, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// 按 id 查找
    pub async fn get_book(&self, id: &BookId) -> Result<Option<Book>, StoreError> {
        let books = self.get_books().await?;
        Ok(books.into_iter().find(|b| b.id() == id))
    }

    /// 整体覆盖写入
    pub async fn save_books(&self, books: &[Book]) -> Result<(), StoreError> {
        let blob = serde_json::to_string(books)
            .map_err(|e| StoreError::BackendError(format!("Failed to serialize books: {}", e)))?;
        self.store.set(STORAGE_KEY, blob).await
    }

    /// 按 id 插入或替换，新绘本追加到末尾
    pub async fn upsert_book(&self, book: Book) -> Result<(), StoreError> {
        let mut books = self.get_books().await?;
        let book_id = book.id().clone();

        match books.iter().position(|b| b.id() == book.id()) {
            Some(idx) => books[idx] = book,
            None => books.push(book),
        }

        self.save_books(&books).await?;
        tracing::debug!(book_id = %book_id, total = books.len(), "Book upserted");
        Ok(())
    }

    /// 删除绘本，返回是否存在
    pub async fn delete_book(&self, id: &BookId) -> Result<bool, StoreError> {
        let books = self.get_books().await?;
        let before = books.len();
        let rest: Vec<Book> = books.into_iter().filter(|b| b.id() != id).collect();

        if rest.len() == before {
            return Ok(false);
        }

        self.save_books(&rest).await?;
        Ok(true)
    }
}

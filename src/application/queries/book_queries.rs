//! Book Queries - 本地绘本库读操作

use crate::domain::book::BookId;

/// 列出全部绘本查询
#[derive(Debug, Clone)]
pub struct ListBooks;

/// 获取单本绘本查询
#[derive(Debug, Clone)]
pub struct GetBook {
    pub book_id: BookId,
}

/// 打开编辑器查询
///
/// `book_id` 为空时新建空白绘本
#[derive(Debug, Clone, Default)]
pub struct OpenEditor {
    pub book_id: Option<BookId>,
    pub page_index: usize,
}

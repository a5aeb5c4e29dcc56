//! Book Commands - 本地绘本库写操作

use crate::domain::book::{Book, BookId};
use crate::domain::editor::EditorState;

/// 保存编辑器草稿命令
///
/// `base` 是打开编辑器时的绘本，提供 id / created_at / remote_id
#[derive(Debug, Clone)]
pub struct SaveBook {
    pub base: Book,
    pub draft: EditorState,
}

/// 删除绘本命令
#[derive(Debug, Clone)]
pub struct DeleteBook {
    pub book_id: BookId,
}

/// 在线分享命令：为本地绘本创建远端副本
#[derive(Debug, Clone)]
pub struct ShareBook {
    pub book_id: BookId,
}

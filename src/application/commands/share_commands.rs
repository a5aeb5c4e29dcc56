//! Share Commands - 服务端分享存储写操作

use crate::domain::book::Book;

/// 发布分享副本命令（服务端分配 id）
#[derive(Debug, Clone)]
pub struct PublishSharedBook {
    pub book: Book,
}

/// 覆盖已有分享副本命令
#[derive(Debug, Clone)]
pub struct UpdateSharedBook {
    pub remote_id: String,
    pub book: Book,
}

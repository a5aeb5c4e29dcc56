//! Share Queries - 服务端分享存储读操作

/// 获取分享副本查询
#[derive(Debug, Clone)]
pub struct GetSharedBook {
    pub remote_id: String,
}

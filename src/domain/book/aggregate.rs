//! Book Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BookId, Page};

/// Book 聚合根
///
/// 不变量:
/// - 页面顺序有意义，只在显式增删时改变
/// - remote_id 只在成功分享后设置，指向服务端副本
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    id: BookId,
    title: String,
    pages: Vec<Page>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    remote_id: Option<String>,
}

impl Book {
    /// 创建空绘本（无标题、无页面）
    pub fn new_empty() -> Self {
        Self {
            id: BookId::new(),
            title: String::new(),
            pages: Vec::new(),
            created_at: Utc::now(),
            remote_id: None,
        }
    }

    pub fn new(id: BookId, title: impl Into<String>, pages: Vec<Page>) -> Self {
        Self {
            id,
            title: title.into(),
            pages,
            created_at: Utc::now(),
            remote_id: None,
        }
    }

    /// 替换标题和页面，保留 id / created_at / remote_id
    pub fn with_content(&self, title: impl Into<String>, pages: Vec<Page>) -> Self {
        Self {
            id: self.id.clone(),
            title: title.into(),
            pages,
            created_at: self.created_at,
            remote_id: self.remote_id.clone(),
        }
    }

    pub fn with_remote_id(mut self, remote_id: impl Into<String>) -> Self {
        self.remote_id = Some(remote_id.into());
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    // Getters
    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn remote_id(&self) -> Option<&str> {
        self.remote_id.as_deref()
    }
}

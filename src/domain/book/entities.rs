//! Book Context - Entities

use serde::{Deserialize, Serialize};

use super::PageId;

/// 绘本页面 - 一段文字 + 一张插图
///
/// 不变量:
/// - id 在所属绘本内唯一
/// - image 为 URL 或 base64 编码的 PNG
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    id: PageId,
    caption: String,
    image: String,
}

impl Page {
    pub fn new(id: PageId, caption: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            caption: caption.into(),
            image: image.into(),
        }
    }

    pub fn id(&self) -> &PageId {
        &self.id
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    /// 文字和插图去空白后均为空
    pub fn is_empty(&self) -> bool {
        self.caption.trim().is_empty() && self.image.trim().is_empty()
    }
}

/// 将插图值格式化为可展示的地址
///
/// URL（http/https 或站内绝对路径）和 data URI 原样返回，
/// 其余视为 base64 编码的 PNG
pub fn image_src(value: &str) -> String {
    if value.starts_with("http") || value.starts_with('/') || value.starts_with("data:") {
        value.to_string()
    } else {
        format!("data:image/png;base64,{}", value)
    }
}

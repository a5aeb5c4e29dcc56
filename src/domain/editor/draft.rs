//! Editor Context - Page Draft

use super::PagePatch;
use crate::domain::book::{Page, PageId};
use crate::domain::AsyncData;

/// 编辑中的页面草稿（不持久化）
///
/// 与 Page 同一身份，但 caption / image 包装为 AsyncData，
/// 用于表达进行中的转写和插图生成
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDraft {
    id: PageId,
    caption: AsyncData<String>,
    image: AsyncData<String>,
}

impl PageDraft {
    /// 新的空白页草稿（两个字段均为 NOT_STARTED）
    pub fn empty() -> Self {
        Self {
            id: PageId::new(),
            caption: AsyncData::not_started(),
            image: AsyncData::not_started(),
        }
    }

    pub fn new(id: PageId, caption: AsyncData<String>, image: AsyncData<String>) -> Self {
        Self { id, caption, image }
    }

    pub fn id(&self) -> &PageId {
        &self.id
    }

    pub fn caption(&self) -> &AsyncData<String> {
        &self.caption
    }

    pub fn image(&self) -> &AsyncData<String> {
        &self.image
    }

    /// 当前文字（无值时为空串）
    pub fn caption_text(&self) -> String {
        self.caption.get_value(String::new())
    }

    /// 空白页判定：文字和插图去空白后均为空
    pub fn is_empty(&self) -> bool {
        self.caption.value().map_or(true, |c| c.trim().is_empty())
            && self.image.value().map_or(true, |i| i.trim().is_empty())
    }

    /// 保存时展开为 Page：取当前值并去空白，未加载视为空串
    pub fn to_page(&self) -> Page {
        Page::new(
            self.id.clone(),
            self.caption.value().map_or("", |c| c.trim()),
            self.image.value().map_or("", |i| i.trim()),
        )
    }

    /// 合并部分字段
    pub(super) fn apply(&mut self, patch: PagePatch) {
        if let Some(caption) = patch.caption {
            self.caption = caption;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
    }
}

impl From<&Page> for PageDraft {
    fn from(page: &Page) -> Self {
        Self {
            id: page.id().clone(),
            caption: AsyncData::loaded(page.caption().to_string()),
            image: AsyncData::loaded(page.image().to_string()),
        }
    }
}

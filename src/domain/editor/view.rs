//! Editor Context - Derived View
//!
//! 编辑界面所需的全部派生状态，均由 EditorState 计算得出

use super::{Action, EditorState, PageDraft};
use crate::domain::book::image_src;

/// 编辑器派生视图
#[derive(Debug, Clone, Copy)]
pub struct EditorView<'a> {
    state: &'a EditorState,
}

impl<'a> EditorView<'a> {
    pub(super) fn new(state: &'a EditorState) -> Self {
        Self { state }
    }

    pub fn page(&self) -> &'a PageDraft {
        self.state.current_page()
    }

    /// 页码（从 1 开始）
    pub fn page_number(&self) -> usize {
        self.state.page_index() + 1
    }

    pub fn caption_text(&self) -> String {
        self.page().caption_text()
    }

    pub fn image_url(&self) -> Option<String> {
        self.page()
            .image()
            .value()
            .filter(|image| !image.is_empty())
            .map(|image| image_src(image))
    }

    pub fn is_loading_transcript(&self) -> bool {
        self.page().caption().is_loading()
    }

    pub fn is_loading_image(&self) -> bool {
        self.page().image().is_loading()
    }

    pub fn is_last_page(&self) -> bool {
        self.state.page_index() == self.state.page_count() - 1
    }

    /// 文字非空且插图不在生成中
    pub fn can_generate_image(&self) -> bool {
        !self.caption_text().trim().is_empty() && !self.is_loading_image()
    }

    /// 正在转写时禁止再次录音
    pub fn can_record(&self) -> bool {
        !self.is_loading_transcript()
    }

    pub fn prev_enabled(&self) -> bool {
        self.state.page_count() > 1
    }

    /// 末页且空白时禁止继续向后
    pub fn next_enabled(&self) -> bool {
        !(self.is_last_page() && self.page().is_empty())
    }

    /// 向前翻页，第一页时回绕到最后一页
    pub fn prev_action(&self) -> Action {
        let page_index = match self.state.page_index() {
            0 => self.state.page_count() - 1,
            i => i - 1,
        };
        Action::SetPageIndex { page_index }
    }

    /// 向后翻页，末页时追加新页
    pub fn next_action(&self) -> Action {
        if self.is_last_page() {
            Action::AddPage
        } else {
            Action::SetPageIndex {
                page_index: self.state.page_index() + 1,
            }
        }
    }

    pub fn error(&self) -> Option<&'a str> {
        self.state.error()
    }
}

//! Editor Context - Actions

use crate::domain::AsyncData;

/// 页面字段的部分更新
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagePatch {
    pub caption: Option<AsyncData<String>>,
    pub image: Option<AsyncData<String>>,
}

impl PagePatch {
    pub fn caption(caption: AsyncData<String>) -> Self {
        Self {
            caption: Some(caption),
            image: None,
        }
    }

    pub fn image(image: AsyncData<String>) -> Self {
        Self {
            caption: None,
            image: Some(image),
        }
    }
}

/// 编辑器动作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// 修改标题（允许空串）
    SetTitle { title: String },
    /// 跳转到指定页
    SetPageIndex { page_index: usize },
    /// 追加空白页（末页已空白时仅跳转）
    AddPage,
    /// 删除指定页（仅剩一页时重置为空白页）
    DeletePage { page_index: usize },
    /// 合并页面字段，并用 error 替换当前错误信息
    UpdatePage {
        page_index: usize,
        payload: PagePatch,
        error: Option<String>,
    },
}

impl Action {
    pub fn set_title(title: impl Into<String>) -> Self {
        Self::SetTitle {
            title: title.into(),
        }
    }

    pub fn update_page(page_index: usize, payload: PagePatch) -> Self {
        Self::UpdatePage {
            page_index,
            payload,
            error: None,
        }
    }

    /// 用户手动编辑文字
    pub fn edit_caption(page_index: usize, text: impl Into<String>) -> Self {
        Self::update_page(page_index, PagePatch::caption(AsyncData::loaded(text.into())))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::SetTitle { .. } => "SET_TITLE",
            Action::SetPageIndex { .. } => "SET_PAGE_INDEX",
            Action::AddPage => "ADD_PAGE",
            Action::DeletePage { .. } => "DELETE_PAGE",
            Action::UpdatePage { .. } => "UPDATE_PAGE",
        }
    }
}

//! Editor Context - 绘本编辑器状态机
//!
//! 职责:
//! - 页面草稿（AsyncData 包装的文字与插图）
//! - 动作与 reducer
//! - 派生视图、保存变换、插图提示词

mod action;
mod draft;
mod prompt;
mod reducer;
mod state;
mod view;

pub use action::{Action, PagePatch};
pub use draft::PageDraft;
pub use prompt::{build_illustration_prompt, MAX_CONTEXT_CAPTIONS};
pub use reducer::reduce;
pub use state::EditorState;
pub use view::EditorView;

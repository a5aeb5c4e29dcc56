//! Editor Context - State

use super::{EditorView, PageDraft};
use crate::domain::book::{Book, PageId};

/// 编辑器状态
///
/// 不变量:
/// - pages 至少一页
/// - page_index 在 [0, pages.len() - 1] 内
///
/// 只通过 `reduce` 变更；关闭编辑器时丢弃，保存走 `to_book`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    pub(super) pages: Vec<PageDraft>,
    pub(super) page_index: usize,
    pub(super) title: String,
    pub(super) error: Option<String>,
}

impl EditorState {
    /// 从绘本派生初始状态
    ///
    /// 无页面时从一张空白页开始；否则每页包装为 LOADED，
    /// 请求的页码截断到有效范围
    pub fn from_book(book: &Book, requested_page_index: usize) -> Self {
        let pages: Vec<PageDraft> = if book.pages().is_empty() {
            vec![PageDraft::empty()]
        } else {
            book.pages().iter().map(PageDraft::from).collect()
        };
        let page_index = requested_page_index.min(pages.len() - 1);

        Self {
            pages,
            page_index,
            title: book.title().to_string(),
            error: None,
        }
    }

    pub fn pages(&self) -> &[PageDraft] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn current_page(&self) -> &PageDraft {
        &self.pages[self.page_index]
    }

    pub fn page(&self, index: usize) -> Option<&PageDraft> {
        self.pages.get(index)
    }

    /// 按页面 ID 查找当前位置
    pub fn position_of(&self, page_id: &PageId) -> Option<usize> {
        self.pages.iter().position(|p| p.id() == page_id)
    }

    pub fn view(&self) -> EditorView<'_> {
        EditorView::new(self)
    }

    /// 保存变换：草稿展开为页面，丢弃空白页
    ///
    /// 以 `base` 为底保留 id / created_at / remote_id
    pub fn to_book(&self, base: &Book) -> Book {
        let pages = self
            .pages
            .iter()
            .map(PageDraft::to_page)
            .filter(|page| !page.is_empty())
            .collect();
        base.with_content(self.title.clone(), pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::{BookId, Page};
    use crate::domain::editor::{reduce, Action};
    use crate::domain::AsyncData;

    fn book_with_pages(n: usize) -> Book {
        let pages = (0..n)
            .map(|i| Page::new(PageId::new(), format!("Caption {}", i), format!("/img/{}.png", i)))
            .collect();
        Book::new(BookId::new(), "Story", pages)
    }

    #[test]
    fn test_initial_state_page_count_and_index() {
        for n in 0..5 {
            let book = book_with_pages(n);
            for requested in [0, 1, 3, 10] {
                let state = EditorState::from_book(&book, requested);
                assert_eq!(state.page_count(), n.max(1));
                assert!(state.page_index() < state.page_count());
            }
        }
    }

    #[test]
    fn test_initial_state_wraps_loaded() {
        let book = book_with_pages(2);
        let state = EditorState::from_book(&book, 1);
        assert_eq!(state.page_index(), 1);
        assert_eq!(state.title(), "Story");
        assert!(state.error().is_none());
        assert_eq!(
            state.current_page().caption(),
            &AsyncData::loaded("Caption 1".to_string())
        );
        assert_eq!(state.current_page().id(), book.pages()[1].id());
    }

    #[test]
    fn test_empty_book_starts_with_blank_page() {
        let state = EditorState::from_book(&Book::new_empty(), 0);
        assert_eq!(state.page_count(), 1);
        assert!(state.current_page().is_empty());
        assert_eq!(state.current_page().caption(), &AsyncData::NotStarted);
    }

    #[test]
    fn test_save_round_trip_drops_empty_pages() {
        let pages = vec![
            Page::new(PageId::from("a"), "First", "/a.png"),
            Page::new(PageId::from("b"), "  ", ""),
            Page::new(PageId::from("c"), "", "/c.png"),
        ];
        let book = Book::new(BookId::from("book"), "T", pages).with_remote_id("remote");

        let saved = EditorState::from_book(&book, 0).to_book(&book);

        let ids: Vec<&str> = saved.pages().iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(saved.pages()[0], book.pages()[0]);
        assert_eq!(saved.pages()[1], book.pages()[2]);
        assert_eq!(saved.remote_id(), Some("remote"));
        assert_eq!(saved.id(), book.id());
    }

    #[test]
    fn test_scenario_new_book_typed_caption() {
        let book = Book::new_empty();
        let state = EditorState::from_book(&book, 0);
        assert_eq!(state.page_count(), 1);
        assert_eq!(state.page_index(), 0);

        let state = reduce(&state, Action::edit_caption(0, "Hello"));
        assert_eq!(
            state.current_page().caption(),
            &AsyncData::loaded("Hello".to_string())
        );

        let saved = state.to_book(&book);
        assert_eq!(saved.page_count(), 1);
        assert_eq!(saved.pages()[0].caption(), "Hello");
        assert_eq!(saved.pages()[0].image(), "");
    }

    #[test]
    fn test_save_carries_title() {
        let book = book_with_pages(1);
        let state = reduce(&EditorState::from_book(&book, 0), Action::set_title("Renamed"));
        assert_eq!(state.to_book(&book).title(), "Renamed");
    }
}

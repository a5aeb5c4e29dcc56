//! Editor Context - Reducer
//!
//! 纯函数 `State × Action -> State`，对所有动作都有定义，
//! 总是返回满足不变量的新状态，不修改旧状态

use super::{Action, EditorState, PageDraft};

/// 应用动作，返回新状态
pub fn reduce(state: &EditorState, action: Action) -> EditorState {
    let mut next = state.clone();

    match action {
        Action::SetTitle { title } => {
            next.title = title;
        }

        Action::SetPageIndex { page_index } => {
            next.page_index = page_index.min(next.pages.len().saturating_sub(1));
        }

        Action::AddPage => {
            let last = next.pages.len().saturating_sub(1);
            if next.pages.last().is_some_and(PageDraft::is_empty) {
                // 末页已空白：跳转过去而不是再追加一张
                next.page_index = last;
            } else {
                next.pages.push(PageDraft::empty());
                next.page_index = next.pages.len() - 1;
            }
        }

        Action::DeletePage { page_index } => {
            if next.pages.len() <= 1 {
                next.pages = vec![PageDraft::empty()];
                next.page_index = 0;
            } else if page_index < next.pages.len() {
                next.pages.remove(page_index);
                next.page_index = page_index.min(next.pages.len() - 1);
            }
        }

        Action::UpdatePage {
            page_index,
            payload,
            error,
        } => {
            if let Some(page) = next.pages.get_mut(page_index) {
                page.apply(payload);
            }
            next.error = error;
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::{Book, BookId, Page, PageId};
    use crate::domain::editor::PagePatch;
    use crate::domain::AsyncData;

    fn state_with(n: usize, page_index: usize) -> EditorState {
        let pages = (0..n)
            .map(|i| Page::new(PageId::from(format!("p{}", i).as_str()), format!("Page {}", i), ""))
            .collect();
        EditorState::from_book(&Book::new(BookId::new(), "T", pages), page_index)
    }

    fn ids(state: &EditorState) -> Vec<String> {
        state.pages().iter().map(|p| p.id().to_string()).collect()
    }

    #[test]
    fn test_set_title_verbatim() {
        let state = reduce(&state_with(1, 0), Action::set_title(""));
        assert_eq!(state.title(), "");
        let state = reduce(&state, Action::set_title("  spaced  "));
        assert_eq!(state.title(), "  spaced  ");
    }

    #[test]
    fn test_set_page_index_in_range() {
        let state = reduce(&state_with(3, 0), Action::SetPageIndex { page_index: 2 });
        assert_eq!(state.page_index(), 2);
    }

    #[test]
    fn test_set_page_index_clamped() {
        let state = reduce(&state_with(3, 0), Action::SetPageIndex { page_index: 99 });
        assert_eq!(state.page_index(), 2);
    }

    #[test]
    fn test_add_page_on_non_empty_last() {
        let state = reduce(&state_with(3, 2), Action::AddPage);
        assert_eq!(state.page_count(), 4);
        assert_eq!(state.page_index(), 3);
        assert!(state.current_page().is_empty());
        assert_eq!(state.current_page().image(), &AsyncData::NotStarted);
    }

    #[test]
    fn test_add_page_idempotent_on_empty_last() {
        let first = reduce(&state_with(2, 0), Action::AddPage);
        assert_eq!(first.page_count(), 3);
        assert_eq!(first.page_index(), 2);

        let back = reduce(&first, Action::SetPageIndex { page_index: 0 });
        let second = reduce(&back, Action::AddPage);
        assert_eq!(second.page_count(), 3);
        assert_eq!(second.page_index(), 2);
        assert_eq!(ids(&second), ids(&first));
    }

    #[test]
    fn test_delete_single_page_resets() {
        let state = state_with(1, 0);
        let original_id = state.current_page().id().clone();

        let next = reduce(&state, Action::DeletePage { page_index: 0 });
        assert_eq!(next.page_count(), 1);
        assert_eq!(next.page_index(), 0);
        assert!(next.current_page().is_empty());
        assert_ne!(next.current_page().id(), &original_id);
    }

    #[test]
    fn test_delete_first_of_two() {
        let next = reduce(&state_with(2, 0), Action::DeletePage { page_index: 0 });
        assert_eq!(ids(&next), vec!["p1"]);
        assert_eq!(next.page_index(), 0);
    }

    #[test]
    fn test_delete_last_clamps_index() {
        let next = reduce(&state_with(3, 2), Action::DeletePage { page_index: 2 });
        assert_eq!(ids(&next), vec!["p0", "p1"]);
        assert_eq!(next.page_index(), 1);
    }

    #[test]
    fn test_delete_middle_keeps_position() {
        let next = reduce(&state_with(3, 1), Action::DeletePage { page_index: 1 });
        assert_eq!(ids(&next), vec!["p0", "p2"]);
        assert_eq!(next.page_index(), 1);
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let state = state_with(2, 1);
        let next = reduce(&state, Action::DeletePage { page_index: 5 });
        assert_eq!(next, state);
    }

    #[test]
    fn test_update_page_only_touches_target() {
        let state = state_with(3, 0);
        let next = reduce(
            &state,
            Action::update_page(1, PagePatch::image(AsyncData::loading())),
        );

        assert_eq!(next.pages()[0], state.pages()[0]);
        assert_eq!(next.pages()[2], state.pages()[2]);
        assert_eq!(next.pages()[1].image(), &AsyncData::Loading);
        assert_eq!(next.pages()[1].caption(), state.pages()[1].caption());
    }

    #[test]
    fn test_update_page_replaces_error() {
        let state = state_with(1, 0);
        let failed = reduce(
            &state,
            Action::UpdatePage {
                page_index: 0,
                payload: PagePatch::caption(AsyncData::failed("Transcription failed".to_string())),
                error: Some("Transcription failed".to_string()),
            },
        );
        assert_eq!(failed.error(), Some("Transcription failed"));

        let cleared = reduce(&failed, Action::edit_caption(0, "retry"));
        assert!(cleared.error().is_none());
    }

    #[test]
    fn test_update_out_of_range_only_sets_error() {
        let state = state_with(1, 0);
        let next = reduce(
            &state,
            Action::UpdatePage {
                page_index: 7,
                payload: PagePatch::caption(AsyncData::loaded("x".to_string())),
                error: Some("oops".to_string()),
            },
        );
        assert_eq!(next.pages(), state.pages());
        assert_eq!(next.error(), Some("oops"));
    }

    #[test]
    fn test_reduce_does_not_mutate_input() {
        let state = state_with(2, 0);
        let snapshot = state.clone();
        let _ = reduce(&state, Action::DeletePage { page_index: 0 });
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_invariants_hold_across_action_sequence() {
        let mut state = state_with(1, 0);
        let actions = vec![
            Action::DeletePage { page_index: 0 },
            Action::DeletePage { page_index: 0 },
            Action::AddPage,
            Action::edit_caption(0, "one"),
            Action::AddPage,
            Action::edit_caption(1, "two"),
            Action::AddPage,
            Action::SetPageIndex { page_index: 99 },
            Action::DeletePage { page_index: 2 },
            Action::DeletePage { page_index: 7 },
            Action::DeletePage { page_index: 0 },
            Action::DeletePage { page_index: 0 },
            Action::SetPageIndex { page_index: 5 },
            Action::AddPage,
        ];

        for action in actions {
            state = reduce(&state, action);
            assert!(state.page_count() >= 1);
            assert!(state.page_index() < state.page_count());
            let _ = state.view().is_loading_image();
        }
    }
}

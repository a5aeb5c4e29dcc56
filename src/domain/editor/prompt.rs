//! Editor Context - 插图提示词
//!
//! 将前几页的文字作为上下文拼进提示词，使各页插图风格保持一致

use super::EditorState;

/// 最多引用的前文页数
pub const MAX_CONTEXT_CAPTIONS: usize = 3;

/// 为指定页构建插图提示词
///
/// 当前页文字为空时返回 None
pub fn build_illustration_prompt(state: &EditorState, page_index: usize) -> Option<String> {
    let caption = state.page(page_index)?.caption_text();
    if caption.trim().is_empty() {
        return None;
    }

    let previous: Vec<String> = state.pages()[..page_index]
        .iter()
        .map(|page| page.caption_text().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();
    let context = &previous[previous.len().saturating_sub(MAX_CONTEXT_CAPTIONS)..];

    if context.is_empty() {
        return Some(caption);
    }

    let mut parts = vec!["Previous pages:".to_string()];
    // 编号为紧接当前页之前的连续页码，结尾是 page_index
    let first_number = page_index - context.len() + 1;
    parts.extend(
        context
            .iter()
            .enumerate()
            .map(|(i, text)| format!("{}. {}", first_number + i, text)),
    );
    parts.push("Current page:".to_string());
    parts.push(caption);
    parts.push("Illustrate the current page scene in a consistent style.".to_string());

    Some(parts.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::{Book, BookId, Page, PageId};

    fn state(captions: &[&str]) -> EditorState {
        let pages = captions
            .iter()
            .map(|c| Page::new(PageId::new(), *c, ""))
            .collect();
        EditorState::from_book(&Book::new(BookId::new(), "T", pages), 0)
    }

    #[test]
    fn test_first_page_uses_caption_only() {
        let s = state(&["A fox wakes up"]);
        assert_eq!(
            build_illustration_prompt(&s, 0).as_deref(),
            Some("A fox wakes up")
        );
    }

    #[test]
    fn test_blank_caption_yields_none() {
        let s = state(&["A fox", "  "]);
        assert!(build_illustration_prompt(&s, 1).is_none());
        assert!(build_illustration_prompt(&s, 9).is_none());
    }

    #[test]
    fn test_context_limited_to_three_most_recent() {
        let s = state(&["one", "two", "", "four", "five", "six"]);
        let prompt = build_illustration_prompt(&s, 5).unwrap();
        assert_eq!(
            prompt,
            "Previous pages:\n3. two\n4. four\n5. five\nCurrent page:\nsix\n\
             Illustrate the current page scene in a consistent style."
        );
    }

    #[test]
    fn test_later_pages_not_included() {
        let s = state(&["one", "two", "three"]);
        let prompt = build_illustration_prompt(&s, 1).unwrap();
        assert!(prompt.contains("1. one"));
        assert!(!prompt.contains("three"));
    }

    #[test]
    fn test_numbering_ends_just_before_current_page() {
        let s = state(&["one", "", "three", "four"]);
        let prompt = build_illustration_prompt(&s, 3).unwrap();
        assert!(prompt.starts_with("Previous pages:\n2. one\n3. three\nCurrent page:\nfour"));
    }
}

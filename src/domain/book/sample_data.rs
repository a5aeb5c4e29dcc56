//! Book Context - 示例绘本
//!
//! 本地库为空时展示

use super::{Book, BookId, Page, PageId};

/// 示例绘本 id
pub const EXAMPLE_BOOK_ID: &str = "example";

/// 示例绘本 "Alphabet Fun"
pub fn example_book() -> Book {
    let pages = [
        ("page-1", "A cartoon of the letter A drinking coffee.", "/example/a.png"),
        ("page-2", "A cartoon of the letter B drinking milk.", "/example/b.png"),
        ("page-3", "A cartoon of the letter C watching TV.", "/example/c.png"),
    ]
    .into_iter()
    .map(|(id, caption, image)| Page::new(PageId::from(id), caption, image))
    .collect();

    Book::new(BookId::from(EXAMPLE_BOOK_ID), "Alphabet Fun", pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_book_has_three_illustrated_pages() {
        let book = example_book();
        assert_eq!(book.id().as_str(), EXAMPLE_BOOK_ID);
        assert_eq!(book.title(), "Alphabet Fun");
        assert_eq!(book.page_count(), 3);
        assert!(book.pages().iter().all(|p| !p.image().is_empty()));
    }
}

//! Book Context - 绘本限界上下文
//!
//! 职责:
//! - 绘本聚合（标题 + 有序页面）
//! - 页面实体（文字 + 插图）
//! - 示例绘本

mod aggregate;
mod entities;
mod errors;
mod sample_data;
mod value_objects;

pub use aggregate::Book;
pub use entities::{image_src, Page};
pub use errors::BookError;
pub use sample_data::{example_book, EXAMPLE_BOOK_ID};
pub use value_objects::{BookId, PageId};

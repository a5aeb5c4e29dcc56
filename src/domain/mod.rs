//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Book Context: 绘本与页面
//! - Editor Context: 编辑器状态机
//!
//! 以及共享的 AsyncData 状态模型

pub mod book;
pub mod editor;

mod async_data;

pub use async_data::AsyncData;

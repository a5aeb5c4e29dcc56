//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod book_handlers;
mod media_handlers;
mod share_handlers;

pub use book_handlers::*;
pub use media_handlers::*;
pub use share_handlers::*;

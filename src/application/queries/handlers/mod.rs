//! Query Handlers 实现

mod book_handlers;
mod share_handlers;

pub use book_handlers::*;
pub use share_handlers::*;

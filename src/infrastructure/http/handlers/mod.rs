//! HTTP Handlers

mod books;
mod media;
mod ping;

pub use books::*;
pub use media::*;
pub use ping::*;

//! Fake Adapters - 测试和离线运行用的客户端

mod fake_image_generator;
mod fake_transcriber;

pub use fake_image_generator::{FakeImageGenerator, PLACEHOLDER_PNG_BASE64};
pub use fake_transcriber::FakeTranscriber;

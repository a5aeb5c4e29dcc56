//! OpenAI Adapter - OpenAI 兼容 HTTP 客户端实现

mod config;
mod image_client;
mod transcription_client;

pub use config::OpenAiClientConfig;
pub use image_client::HttpImageClient;
pub use transcription_client::HttpTranscriptionClient;

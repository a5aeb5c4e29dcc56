//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod image_generator;
mod key_value_store;
mod remote_book_store;
mod transcriber;

pub use image_generator::{
    GenerateImageRequest, GeneratedImage, ImageGenerationError, ImageGeneratorPort,
};
pub use key_value_store::{KeyValueStorePort, StoreError};
pub use remote_book_store::{RemoteBookStorePort, RemoteStoreError};
pub use transcriber::{TranscribeRequest, TranscribeResponse, TranscriberPort, TranscriptionError};

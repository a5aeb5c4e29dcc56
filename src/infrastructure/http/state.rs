//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    GenerateImageHandler, PublishSharedBookHandler, TranscribeAudioHandler,
    UpdateSharedBookHandler,
    // Query handlers
    GetSharedBookHandler,
    // Ports
    ImageGeneratorPort, RemoteBookStorePort, TranscriberPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub shared_books: Arc<dyn RemoteBookStorePort>,
    pub transcriber: Arc<dyn TranscriberPort>,
    pub image_generator: Arc<dyn ImageGeneratorPort>,

    // ========== Command Handlers ==========
    pub publish_shared_book_handler: PublishSharedBookHandler,
    pub update_shared_book_handler: UpdateSharedBookHandler,
    pub transcribe_audio_handler: TranscribeAudioHandler,
    pub generate_image_handler: GenerateImageHandler,

    // ========== Query Handlers ==========
    pub get_shared_book_handler: GetSharedBookHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        shared_books: Arc<dyn RemoteBookStorePort>,
        transcriber: Arc<dyn TranscriberPort>,
        image_generator: Arc<dyn ImageGeneratorPort>,
    ) -> Self {
        Self {
            // Ports
            shared_books: shared_books.clone(),
            transcriber: transcriber.clone(),
            image_generator: image_generator.clone(),

            // Command handlers
            publish_shared_book_handler: PublishSharedBookHandler::new(shared_books.clone()),
            update_shared_book_handler: UpdateSharedBookHandler::new(shared_books.clone()),
            transcribe_audio_handler: TranscribeAudioHandler::new(transcriber),
            generate_image_handler: GenerateImageHandler::new(image_generator),

            // Query handlers
            get_shared_book_handler: GetSharedBookHandler::new(shared_books),
        }
    }
}

//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（KeyValueStore、RemoteBookStore、Transcriber、ImageGenerator）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - library: 本地绘本库
//! - editor_session: 编辑器会话与异步流程编排
//! - error: 应用层错误定义

pub mod commands;
pub mod editor_session;
pub mod error;
pub mod library;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Book commands
    DeleteBook,
    SaveBook,
    ShareBook,
    // Share commands
    PublishSharedBook,
    UpdateSharedBook,
    // Media commands
    GenerateImage,
    TranscribeAudio,
    // Handlers
    handlers::{
        share_url, DeleteBookHandler, GenerateImageHandler, PublishSharedBookHandler,
        SaveBookHandler, SaveBookResponse, ShareBookHandler, ShareBookResponse,
        SharedBookResponse, TranscribeAudioHandler, TranscribeAudioResponse,
        UpdateSharedBookHandler, NO_TRANSCRIPT_FALLBACK,
    },
};

pub use editor_session::{
    EditorSession, JobOutcome, PendingJob, Workflow, IMAGE_GENERATION_FAILED,
    TRANSCRIPTION_FAILED,
};

pub use error::ApplicationError;

pub use library::{BookLibrary, STORAGE_KEY};

pub use ports::{
    // Key-value store
    KeyValueStorePort,
    StoreError,
    // Remote book store
    RemoteBookStorePort,
    RemoteStoreError,
    // Transcriber
    TranscribeRequest,
    TranscribeResponse,
    TranscriberPort,
    TranscriptionError,
    // Image generator
    GenerateImageRequest,
    GeneratedImage,
    ImageGenerationError,
    ImageGeneratorPort,
};

pub use queries::{
    // Book queries
    GetBook,
    ListBooks,
    OpenEditor,
    // Share queries
    GetSharedBook,
    // Handlers
    handlers::{
        GetBookHandler, GetSharedBookHandler, ListBooksHandler, OpenEditorHandler,
        OpenEditorResponse,
    },
};

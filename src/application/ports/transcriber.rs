//! Transcriber Port - 语音转文字
//!
//! 外部转写服务的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 转写错误
#[derive(Debug, Error)]
pub enum TranscriptionError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid audio: {0}")]
    InvalidAudio(String),
}

/// 转写请求
#[derive(Debug, Clone)]
pub struct TranscribeRequest {
    /// 录音数据
    pub audio: Vec<u8>,
    /// 文件名（上游服务据此判断格式）
    pub file_name: String,
    /// MIME 类型
    pub mime_type: String,
}

impl TranscribeRequest {
    /// 浏览器 MediaRecorder 录制的 webm 音频
    pub fn webm(audio: Vec<u8>) -> Self {
        Self {
            audio,
            file_name: "recording.webm".to_string(),
            mime_type: "audio/webm".to_string(),
        }
    }
}

/// 转写结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscribeResponse {
    /// 转写文本，服务未返回文本时为 None
    pub transcript: Option<String>,
}

/// Transcriber Port
#[async_trait]
pub trait TranscriberPort: Send + Sync {
    async fn transcribe(&self, request: TranscribeRequest)
        -> Result<TranscribeResponse, TranscriptionError>;
}

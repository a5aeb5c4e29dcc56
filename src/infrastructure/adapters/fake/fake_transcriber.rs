//! Fake Transcriber - 用于测试的转写客户端
//!
//! 不调用外部服务，返回固定文本或固定失败

use async_trait::async_trait;
use std::time::Duration;

use crate::application::ports::{
    TranscribeRequest, TranscribeResponse, TranscriberPort, TranscriptionError,
};

/// Fake Transcriber
pub struct FakeTranscriber {
    /// 固定返回的文本，None 模拟服务未返回文本
    transcript: Option<String>,
    /// 是否模拟失败
    fail: bool,
    /// 模拟延迟
    latency: Duration,
}

impl FakeTranscriber {
    /// 始终返回指定文本
    pub fn with_transcript(transcript: impl Into<String>) -> Self {
        Self {
            transcript: Some(transcript.into()),
            fail: false,
            latency: Duration::ZERO,
        }
    }

    /// 服务成功但不返回文本
    pub fn silent() -> Self {
        Self {
            transcript: None,
            fail: false,
            latency: Duration::ZERO,
        }
    }

    /// 始终失败
    pub fn failing() -> Self {
        Self {
            transcript: None,
            fail: true,
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl TranscriberPort for FakeTranscriber {
    async fn transcribe(
        &self,
        request: TranscribeRequest,
    ) -> Result<TranscribeResponse, TranscriptionError> {
        tracing::debug!(
            audio_size = request.audio.len(),
            mime_type = %request.mime_type,
            "FakeTranscriber: returning fixed transcript"
        );

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if self.fail {
            return Err(TranscriptionError::ServiceError("fake failure".to_string()));
        }

        Ok(TranscribeResponse {
            transcript: self.transcript.clone(),
        })
    }
}

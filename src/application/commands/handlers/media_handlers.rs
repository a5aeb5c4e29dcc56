//! Media Command Handlers - 转写与插图生成代理

use std::sync::Arc;

use crate::application::commands::{GenerateImage, TranscribeAudio};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    GenerateImageRequest, GeneratedImage, ImageGeneratorPort, TranscribeRequest, TranscriberPort,
};

/// 服务未返回文本时的占位文字
pub const NO_TRANSCRIPT_FALLBACK: &str = "(No transcript available)";

// ============================================================================
// TranscribeAudio
// ============================================================================

/// 转写响应
#[derive(Debug, Clone)]
pub struct TranscribeAudioResponse {
    pub transcript: String,
}

/// TranscribeAudio Handler
pub struct TranscribeAudioHandler {
    transcriber: Arc<dyn TranscriberPort>,
}

impl TranscribeAudioHandler {
    pub fn new(transcriber: Arc<dyn TranscriberPort>) -> Self {
        Self { transcriber }
    }

    pub async fn handle(
        &self,
        command: TranscribeAudio,
    ) -> Result<TranscribeAudioResponse, ApplicationError> {
        if command.audio.is_empty() {
            return Err(ApplicationError::validation("Audio file is empty"));
        }

        let audio_size = command.audio.len();
        let response = self
            .transcriber
            .transcribe(TranscribeRequest {
                audio: command.audio,
                file_name: command.file_name,
                mime_type: command.mime_type,
            })
            .await?;

        let transcript = response
            .transcript
            .unwrap_or_else(|| NO_TRANSCRIPT_FALLBACK.to_string());

        tracing::info!(
            audio_size = audio_size,
            transcript_len = transcript.len(),
            "Audio transcribed"
        );

        Ok(TranscribeAudioResponse { transcript })
    }
}

// ============================================================================
// GenerateImage
// ============================================================================

/// GenerateImage Handler
pub struct GenerateImageHandler {
    generator: Arc<dyn ImageGeneratorPort>,
}

impl GenerateImageHandler {
    pub fn new(generator: Arc<dyn ImageGeneratorPort>) -> Self {
        Self { generator }
    }

    pub async fn handle(&self, command: GenerateImage) -> Result<GeneratedImage, ApplicationError> {
        if command.prompt.trim().is_empty() {
            return Err(ApplicationError::validation("Prompt is required"));
        }

        let prompt_len = command.prompt.len();
        let image = self
            .generator
            .generate(GenerateImageRequest {
                prompt: command.prompt,
            })
            .await?;

        tracing::info!(
            prompt_len = prompt_len,
            inline = matches!(image, GeneratedImage::Base64(_)),
            "Image generated"
        );

        Ok(image)
    }
}

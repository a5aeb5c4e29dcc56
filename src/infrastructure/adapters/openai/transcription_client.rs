//! HTTP Transcription Client - 调用 OpenAI 兼容转写服务
//!
//! 实现 TranscriberPort trait
//!
//! 外部 API:
//! POST {base_url}/v1/audio/transcriptions
//! Request: multipart, `file` + `model`
//! Response: {"text": "..."}

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;

use super::OpenAiClientConfig;
use crate::application::ports::{
    TranscribeRequest, TranscribeResponse, TranscriberPort, TranscriptionError,
};

/// 转写响应体
#[derive(Debug, Deserialize)]
struct TranscriptionHttpResponse {
    #[serde(default)]
    text: Option<String>,
}

/// HTTP 转写客户端
pub struct HttpTranscriptionClient {
    client: Client,
    config: OpenAiClientConfig,
}

impl HttpTranscriptionClient {
    /// 创建新的转写客户端
    pub fn new(config: OpenAiClientConfig) -> Result<Self, TranscriptionError> {
        let client = config
            .build_client()
            .map_err(|e| TranscriptionError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn transcribe_url(&self) -> String {
        self.config.endpoint("/v1/audio/transcriptions")
    }
}

#[async_trait]
impl TranscriberPort for HttpTranscriptionClient {
    async fn transcribe(
        &self,
        request: TranscribeRequest,
    ) -> Result<TranscribeResponse, TranscriptionError> {
        let audio_size = request.audio.len();
        let part = Part::bytes(request.audio)
            .file_name(request.file_name)
            .mime_str(&request.mime_type)
            .map_err(|e| TranscriptionError::InvalidAudio(e.to_string()))?;
        let form = Form::new()
            .part("file", part)
            .text("model", self.config.transcription_model.clone());

        tracing::debug!(
            url = %self.transcribe_url(),
            audio_size = audio_size,
            model = %self.config.transcription_model,
            "Sending transcription request"
        );

        let response = self
            .config
            .authorize(self.client.post(self.transcribe_url()))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TranscriptionError::Timeout
                } else if e.is_connect() {
                    TranscriptionError::NetworkError(format!(
                        "Cannot connect to transcription service: {}",
                        e
                    ))
                } else {
                    TranscriptionError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TranscriptionError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: TranscriptionHttpResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::InvalidResponse(e.to_string()))?;

        tracing::info!(
            audio_size = audio_size,
            has_text = body.text.is_some(),
            "Transcription completed"
        );

        Ok(TranscribeResponse {
            transcript: body.text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcribe_url() {
        let client =
            HttpTranscriptionClient::new(OpenAiClientConfig::new("http://localhost:8080")).unwrap();
        assert_eq!(
            client.transcribe_url(),
            "http://localhost:8080/v1/audio/transcriptions"
        );
    }

    #[test]
    fn test_response_without_text() {
        let body: TranscriptionHttpResponse = serde_json::from_str("{}").unwrap();
        assert!(body.text.is_none());
    }
}

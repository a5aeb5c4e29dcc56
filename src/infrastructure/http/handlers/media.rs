//! Media HTTP Handlers
//!
//! 转写与插图生成，代理到外部服务

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    Json,
};
use std::sync::Arc;

use crate::application::{GenerateImage, GeneratedImage, TranscribeAudio};
use crate::infrastructure::http::dto::{ApiResponse, GenerateImageRequest, TranscribeResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 上传录音（multipart 字段 `file`），返回转写文本
pub async fn transcribe(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<TranscribeResponse>>, ApiError> {
    let mut command: Option<TranscribeAudio> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("recording.webm").to_string();
        let mime_type = field.content_type().unwrap_or("audio/webm").to_string();
        let audio = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;

        command = Some(TranscribeAudio {
            audio: audio.to_vec(),
            file_name,
            mime_type,
        });
    }

    let command = command.ok_or_else(|| ApiError::BadRequest("No file uploaded".to_string()))?;

    tracing::debug!(
        file_name = %command.file_name,
        audio_size = command.audio.len(),
        "Transcription requested"
    );

    let result = state.transcribe_audio_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(TranscribeResponse {
        transcript: result.transcript,
    })))
}

/// 根据提示词生成插图，返回 `{base64}` 或 `{url}`
pub async fn generate_image(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateImageRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<GeneratedImage>>, ApiError> {
    let Json(request) = payload?;

    let image = state
        .generate_image_handler
        .handle(GenerateImage {
            prompt: request.prompt,
        })
        .await?;

    Ok(Json(ApiResponse::success(image)))
}

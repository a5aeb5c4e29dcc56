//! Image Generator Port - 插图生成
//!
//! 外部图像生成服务的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// 图像生成错误
#[derive(Debug, Error)]
pub enum ImageGenerationError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Prompt is required")]
    EmptyPrompt,
}

/// 图像生成请求
#[derive(Debug, Clone)]
pub struct GenerateImageRequest {
    pub prompt: String,
}

/// 生成的图像
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratedImage {
    /// 图像 URL
    Url(String),
    /// base64 编码的 PNG
    Base64(String),
}

impl GeneratedImage {
    /// 作为页面 image 字段保存的值
    pub fn into_value(self) -> String {
        match self {
            GeneratedImage::Url(url) => url,
            GeneratedImage::Base64(data) => data,
        }
    }
}

/// Image Generator Port
#[async_trait]
pub trait ImageGeneratorPort: Send + Sync {
    async fn generate(
        &self,
        request: GenerateImageRequest,
    ) -> Result<GeneratedImage, ImageGenerationError>;

    /// 检查服务是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}

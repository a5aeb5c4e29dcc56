//! Fake Image Generator - 用于测试的插图生成客户端
//!
//! 不调用外部服务，返回固定图像

use async_trait::async_trait;
use std::time::Duration;

use crate::application::ports::{
    GenerateImageRequest, GeneratedImage, ImageGenerationError, ImageGeneratorPort,
};

/// 1x1 透明 PNG
pub const PLACEHOLDER_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

/// Fake Image Generator
pub struct FakeImageGenerator {
    image: GeneratedImage,
    fail: bool,
    latency: Duration,
}

impl FakeImageGenerator {
    /// 返回内联的占位 PNG
    pub fn new() -> Self {
        Self {
            image: GeneratedImage::Base64(PLACEHOLDER_PNG_BASE64.to_string()),
            fail: false,
            latency: Duration::ZERO,
        }
    }

    /// 返回指定 URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            image: GeneratedImage::Url(url.into()),
            ..Self::new()
        }
    }

    /// 始终失败
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for FakeImageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGeneratorPort for FakeImageGenerator {
    async fn generate(
        &self,
        request: GenerateImageRequest,
    ) -> Result<GeneratedImage, ImageGenerationError> {
        tracing::debug!(
            prompt_len = request.prompt.len(),
            "FakeImageGenerator: returning fixed image"
        );

        if request.prompt.trim().is_empty() {
            return Err(ImageGenerationError::EmptyPrompt);
        }

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if self.fail {
            return Err(ImageGenerationError::ServiceError("fake failure".to_string()));
        }

        Ok(self.image.clone())
    }
}

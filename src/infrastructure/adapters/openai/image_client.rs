//! HTTP Image Client - 调用 OpenAI 兼容图像生成服务
//!
//! 实现 ImageGeneratorPort trait
//!
//! 外部 API:
//! POST {base_url}/v1/images/generations
//! Request: {"model": "...", "prompt": "...", "size": "1024x1024", "n": 1}
//! Response: {"data": [{"b64_json": "..."} | {"url": "..."}]}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::OpenAiClientConfig;
use crate::application::ports::{
    GenerateImageRequest, GeneratedImage, ImageGenerationError, ImageGeneratorPort,
};

/// 图像生成请求体
#[derive(Debug, Serialize)]
struct ImageHttpRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    size: &'a str,
    n: u32,
}

#[derive(Debug, Deserialize)]
struct ImageDatum {
    #[serde(default)]
    b64_json: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

/// 图像生成响应体
#[derive(Debug, Deserialize)]
struct ImageHttpResponse {
    #[serde(default)]
    data: Vec<ImageDatum>,
}

impl ImageHttpResponse {
    /// 取第一张图，优先 base64
    fn into_image(self) -> Result<GeneratedImage, ImageGenerationError> {
        let datum = self
            .data
            .into_iter()
            .next()
            .ok_or_else(|| ImageGenerationError::InvalidResponse("No image returned".to_string()))?;

        match (datum.b64_json, datum.url) {
            (Some(b64), _) => Ok(GeneratedImage::Base64(b64)),
            (None, Some(url)) => Ok(GeneratedImage::Url(url)),
            (None, None) => Err(ImageGenerationError::InvalidResponse(
                "Image has neither b64_json nor url".to_string(),
            )),
        }
    }
}

/// HTTP 图像生成客户端
pub struct HttpImageClient {
    client: Client,
    config: OpenAiClientConfig,
}

impl HttpImageClient {
    /// 创建新的图像生成客户端
    pub fn new(config: OpenAiClientConfig) -> Result<Self, ImageGenerationError> {
        let client = config
            .build_client()
            .map_err(|e| ImageGenerationError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn generate_url(&self) -> String {
        self.config.endpoint("/v1/images/generations")
    }
}

#[async_trait]
impl ImageGeneratorPort for HttpImageClient {
    async fn generate(
        &self,
        request: GenerateImageRequest,
    ) -> Result<GeneratedImage, ImageGenerationError> {
        if request.prompt.trim().is_empty() {
            return Err(ImageGenerationError::EmptyPrompt);
        }

        let body = ImageHttpRequest {
            model: &self.config.image_model,
            prompt: &request.prompt,
            size: &self.config.image_size,
            n: 1,
        };

        tracing::debug!(
            url = %self.generate_url(),
            prompt_len = request.prompt.len(),
            model = %self.config.image_model,
            "Sending image generation request"
        );

        let response = self
            .config
            .authorize(self.client.post(self.generate_url()))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ImageGenerationError::Timeout
                } else if e.is_connect() {
                    ImageGenerationError::NetworkError(format!(
                        "Cannot connect to image service: {}",
                        e
                    ))
                } else {
                    ImageGenerationError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ImageGenerationError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let image = response
            .json::<ImageHttpResponse>()
            .await
            .map_err(|e| ImageGenerationError::InvalidResponse(e.to_string()))?
            .into_image()?;

        tracing::info!(
            model = %self.config.image_model,
            inline = matches!(image, GeneratedImage::Base64(_)),
            "Image generation completed"
        );

        Ok(image)
    }
}

//! OpenAI 兼容服务客户端配置

use std::time::Duration;

use reqwest::{Client, RequestBuilder};

/// OpenAI 客户端配置
#[derive(Debug, Clone)]
pub struct OpenAiClientConfig {
    /// 服务基础 URL
    pub base_url: String,
    /// API Key，为空时不发送 Authorization
    pub api_key: Option<String>,
    /// 转写模型
    pub transcription_model: String,
    /// 图像模型
    pub image_model: String,
    /// 图像尺寸
    pub image_size: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for OpenAiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            api_key: None,
            transcription_model: "whisper-1".to_string(),
            image_model: "gpt-image-1".to_string(),
            image_size: "1024x1024".to_string(),
            timeout_secs: 120,
        }
    }
}

impl OpenAiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub(super) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub(super) fn build_client(&self) -> Result<Client, reqwest::Error> {
        Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
    }

    pub(super) fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.api_key.as_deref().filter(|key| !key.is_empty()) {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = OpenAiClientConfig::default();
        assert_eq!(config.base_url, "https://api.openai.com");
        assert_eq!(config.transcription_model, "whisper-1");
        assert_eq!(config.image_model, "gpt-image-1");
        assert_eq!(config.image_size, "1024x1024");
        assert_eq!(config.timeout_secs, 120);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = OpenAiClientConfig::new("http://localhost:9000/")
            .with_api_key("sk-test")
            .with_timeout(30);
        assert_eq!(config.endpoint("/v1/images/generations"), "http://localhost:9000/v1/images/generations");
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.timeout_secs, 30);
    }
}

//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// OpenAI 兼容服务配置
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 公开访问的 Base URL（用于生成分享链接）
    /// 如果未设置，则使用 http://{host}:{port}
    #[serde(default)]
    pub base_url: Option<String>,

    /// 请求体最大大小（字节），默认 25MB
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5060
}

fn default_max_upload_size() -> u64 {
    25 * 1024 * 1024 // 25 MB，与上游转写接口上限一致
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_url: None,
            max_upload_size: default_max_upload_size(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 获取公开的 Base URL
    pub fn public_base_url(&self) -> String {
        self.base_url.clone().unwrap_or_else(|| {
            let host = if self.host == "0.0.0.0" {
                "localhost"
            } else {
                &self.host
            };
            format!("http://{}:{}", host, self.port)
        })
    }
}

/// OpenAI 兼容服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    /// 服务基础 URL
    #[serde(default = "default_openai_url")]
    pub base_url: String,

    /// API Key；未设置时读取 OPENAI_API_KEY
    #[serde(default)]
    pub api_key: Option<String>,

    /// 转写模型
    #[serde(default = "default_transcription_model")]
    pub transcription_model: String,

    /// 图像模型
    #[serde(default = "default_image_model")]
    pub image_model: String,

    /// 图像尺寸
    #[serde(default = "default_image_size")]
    pub image_size: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_openai_timeout")]
    pub timeout_secs: u64,
}

fn default_openai_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_transcription_model() -> String {
    "whisper-1".to_string()
}

fn default_image_model() -> String {
    "gpt-image-1".to_string()
}

fn default_image_size() -> String {
    "1024x1024".to_string()
}

fn default_openai_timeout() -> u64 {
    120
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: default_openai_url(),
            api_key: None,
            transcription_model: default_transcription_model(),
            image_model: default_image_model(),
            image_size: default_image_size(),
            timeout_secs: default_openai_timeout(),
        }
    }
}

impl OpenAiConfig {
    /// 是否配置了非空 API Key
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.trim().is_empty())
    }

    /// 日志用的脱敏 API Key
    pub fn redacted_api_key(&self) -> String {
        match self.api_key.as_deref() {
            Some(key) if key.chars().count() > 8 => {
                format!("{}****", key.chars().take(4).collect::<String>())
            }
            Some(key) if !key.is_empty() => "****".to_string(),
            _ => "(not set)".to_string(),
        }
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 数据目录（本地绘本库文件）
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// 分享副本 sled 数据库路径
    #[serde(default = "default_shared_books_path")]
    pub shared_books_path: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_shared_books_path() -> String {
    "data/shared.sled".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            shared_books_path: default_shared_books_path(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5060);
        assert_eq!(config.openai.base_url, "https://api.openai.com");
        assert_eq!(config.openai.transcription_model, "whisper-1");
        assert_eq!(config.openai.image_model, "gpt-image-1");
        assert_eq!(config.openai.timeout_secs, 120);
        assert_eq!(config.storage.shared_books_path, "data/shared.sled");
        assert_eq!(config.log.level, "info");
        assert!(!config.log.json);
    }

    #[test]
    fn test_public_base_url() {
        let mut config = ServerConfig::default();
        assert_eq!(config.addr(), "0.0.0.0:5060");
        assert_eq!(config.public_base_url(), "http://localhost:5060");

        config.base_url = Some("https://tales.example".to_string());
        assert_eq!(config.public_base_url(), "https://tales.example");
    }

    #[test]
    fn test_api_key_redaction() {
        let mut config = OpenAiConfig::default();
        assert!(!config.has_api_key());
        assert_eq!(config.redacted_api_key(), "(not set)");

        config.api_key = Some("sk-abcdefghijkl".to_string());
        assert!(config.has_api_key());
        assert_eq!(config.redacted_api_key(), "sk-a****");

        config.api_key = Some("short".to_string());
        assert_eq!(config.redacted_api_key(), "****");
    }
}

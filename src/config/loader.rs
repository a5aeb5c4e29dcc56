//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// API Key 的备用环境变量
const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `TINY_TALES_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `TINY_TALES_SERVER__PORT=8080`
/// - `TINY_TALES_SERVER__BASE_URL=https://tales.example`
/// - `TINY_TALES_OPENAI__BASE_URL=http://localhost:11434`
/// - `TINY_TALES_STORAGE__SHARED_BOOKS_PATH=/data/shared.sled`
///
/// `openai.api_key` 未设置时回退到 `OPENAI_API_KEY`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 5060)?
        .set_default("server.max_upload_size", 25 * 1024 * 1024)?
        .set_default("openai.base_url", "https://api.openai.com")?
        .set_default("openai.transcription_model", "whisper-1")?
        .set_default("openai.image_model", "gpt-image-1")?
        .set_default("openai.image_size", "1024x1024")?
        .set_default("openai.timeout_secs", 120)?
        .set_default("storage.data_dir", "data")?
        .set_default("storage.shared_books_path", "data/shared.sled")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 注意: 环境变量名会被转换为小写
    builder = builder.add_source(
        Environment::with_prefix("TINY_TALES")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let mut app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    if !app_config.openai.has_api_key() {
        app_config.openai.api_key = std::env::var(OPENAI_API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());
    }

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.openai.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "OpenAI base URL cannot be empty".to_string(),
        ));
    }

    if config.openai.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "OpenAI timeout cannot be 0".to_string(),
        ));
    }

    if config.storage.shared_books_path.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "Shared books path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Public Base URL: {}", config.server.public_base_url());
    tracing::info!("Max Upload Size: {} bytes", config.server.max_upload_size);
    tracing::info!("OpenAI URL: {}", config.openai.base_url);
    tracing::info!("OpenAI API Key: {}", config.openai.redacted_api_key());
    tracing::info!(
        "Models: transcription={}, image={} ({})",
        config.openai.transcription_model,
        config.openai.image_model,
        config.openai.image_size
    );
    tracing::info!("OpenAI Timeout: {}s", config.openai.timeout_secs);
    tracing::info!("Data Directory: {:?}", config.storage.data_dir);
    tracing::info!("Shared Books: {}", config.storage.shared_books_path);
    tracing::info!("Log Level: {} (json={})", config.log.level, config.log.json);
    tracing::info!("=================================");
}

//! Tiny Tales - 绘本制作服务
//!
//! - Domain: book/, editor/ (Bounded Contexts)
//! - Application: commands, queries, ports, editor_session
//! - Infrastructure: http, memory, persistence, adapters

use std::sync::Arc;

use tiny_tales::application::{ImageGeneratorPort, TranscriberPort};
use tiny_tales::config::{load_config, print_config, AppConfig};
use tiny_tales::infrastructure::adapters::{
    FakeImageGenerator, FakeTranscriber, HttpImageClient, HttpTranscriptionClient,
    OpenAiClientConfig,
};
use tiny_tales::infrastructure::http::{AppState, HttpServer, ServerConfig};
use tiny_tales::infrastructure::persistence::sled::{
    SledSharedBookStore, SledSharedBookStoreConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);

    tracing::info!("Tiny Tales - 绘本制作服务");
    print_config(&config);

    // 确保数据目录存在
    tokio::fs::create_dir_all(&config.storage.data_dir).await?;
    if let Some(parent) = std::path::Path::new(&config.storage.shared_books_path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 创建分享存储
    let shared_books = Arc::new(SledSharedBookStore::new(&SledSharedBookStoreConfig {
        db_path: config.storage.shared_books_path.clone(),
    })?);

    // 创建转写和插图客户端
    let (transcriber, image_generator) = build_ai_clients(&config)?;

    let server_config = ServerConfig::new(&config.server.host, config.server.port)
        .with_max_body_bytes(usize::try_from(config.server.max_upload_size)?);
    let state = AppState::new(shared_books.clone(), transcriber, image_generator);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    shared_books.flush()?;
    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志
fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},tiny_tales={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// 创建转写和插图客户端
///
/// 未配置 API Key 时使用 fake 客户端，便于离线运行
fn build_ai_clients(
    config: &AppConfig,
) -> anyhow::Result<(Arc<dyn TranscriberPort>, Arc<dyn ImageGeneratorPort>)> {
    if !config.openai.has_api_key() {
        tracing::warn!("No OpenAI API key configured, using fake transcription and image clients");
        return Ok((
            Arc::new(FakeTranscriber::silent()),
            Arc::new(FakeImageGenerator::new()),
        ));
    }

    let client_config = OpenAiClientConfig {
        base_url: config.openai.base_url.clone(),
        api_key: config.openai.api_key.clone(),
        transcription_model: config.openai.transcription_model.clone(),
        image_model: config.openai.image_model.clone(),
        image_size: config.openai.image_size.clone(),
        timeout_secs: config.openai.timeout_secs,
    };

    let transcriber = Arc::new(HttpTranscriptionClient::new(client_config.clone())?);
    let image_generator = Arc::new(HttpImageClient::new(client_config)?);

    Ok((transcriber, image_generator))
}

//! Chordex service main entry point
//! Chordex服务主入口点

use anyhow::Context;
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use chordex::config::init_tracing;
use chordex::gemini::{GeminiClient, TextGenerator};
use chordex::server::config::{ChordexConfig, CliArgs};
use chordex::server::credentials;
use chordex::server::{HttpGateway, MusicCatalog};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments / 解析命令行参数
    let args = CliArgs::parse();

    // Load configuration with file, env and CLI override / 加载配置，支持文件、环境变量与CLI覆盖
    let config = ChordexConfig::load_with_cli(&args)?;

    // Initialize logging with configuration / 使用配置初始化日志
    init_tracing(&config.log.to_logging_config())?;

    tracing::info!("Chordex server starting with:");
    tracing::info!("  - HTTP gateway on: {}", config.http.addr);
    tracing::info!("  - Catalog path: {}", config.catalog_path);
    tracing::info!("  - Gemini model: {}", config.gemini.model);

    // Resolve the API key; a placeholder downgrades the service instead
    // of refusing to start / 解析API密钥；占位符使服务降级而非拒绝启动
    let api_key = credentials::resolve_api_key(Path::new(&config.api_key_path));
    let generator: Option<Arc<dyn TextGenerator>> = if credentials::is_placeholder(&api_key) {
        None
    } else {
        let timeout = config.gemini.request_timeout_secs.map(Duration::from_secs);
        let client = GeminiClient::new(
            config.gemini.endpoint.as_str(),
            config.gemini.model.as_str(),
            api_key,
            timeout,
        )
        .context("initialize Gemini client")?;
        Some(Arc::new(client))
    };

    // The catalog is required; failing to load it is fatal
    // 目录为必需项；加载失败是致命错误
    let catalog = Arc::new(MusicCatalog::load(Path::new(&config.catalog_path))?);
    tracing::info!(
        "Loaded catalog: {} musical keys, {} music types",
        catalog.musical_keys.len(),
        catalog.music_types.len()
    );

    let gateway = HttpGateway::new(config.http.addr, catalog, generator);

    tracing::info!("Available endpoints:");
    tracing::info!("  GET /api/config");
    tracing::info!("  GET /api/chord-progressions?key=<key>&musicType=<musicType>");
    tracing::info!("  GET /health");

    // Serve until shutdown signal / 服务直至收到关闭信号
    tokio::select! {
        result = gateway.start() => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Chordex server shutting down");
        }
    }

    Ok(())
}

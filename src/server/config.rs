//! Chordex service configuration
//! Chordex服务配置

use anyhow::{Context, Result};
use clap::Parser;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::config::base::{LogConfig, ServerConfig};

/// Chordex command line arguments / Chordex命令行参数
#[derive(Parser, Debug, Clone)]
#[command(
    name = "chordex",
    version = "0.1.0",
    about = "Chordex - chord progression suggestion backend\nChordex - 和弦进行建议后端",
    long_about = "Chordex validates a musical key and music type against a static catalog and asks the Gemini API for matching chord progressions.\nChordex根据静态目录验证音乐调与音乐风格，并向Gemini API查询匹配的和弦进行。"
)]
pub struct CliArgs {
    /// Configuration file path / 配置文件路径
    #[arg(short, long, value_name = "FILE", help = "Configuration file path / 配置文件路径")]
    pub config: Option<String>,

    /// HTTP listen address / HTTP监听地址
    #[arg(long, value_name = "ADDR", help = "HTTP listen address (e.g., 0.0.0.0:8080) / HTTP监听地址")]
    pub http_addr: Option<String>,

    /// Musical catalog path / 音乐目录路径
    #[arg(long, value_name = "FILE", help = "Musical catalog JSON path / 音乐目录JSON路径")]
    pub catalog: Option<String>,

    /// Fallback API key file path / 备用API密钥文件路径
    #[arg(long, value_name = "FILE", help = "Fallback Gemini API key JSON path / 备用Gemini API密钥JSON路径")]
    pub api_key_file: Option<String>,

    /// Gemini model name / Gemini模型名称
    #[arg(long, value_name = "MODEL", help = "Gemini model name / Gemini模型名称")]
    pub model: Option<String>,

    /// Log level / 日志级别
    #[arg(long, value_name = "LEVEL", help = "Log level (trace, debug, info, warn, error) / 日志级别")]
    pub log_level: Option<String>,
}

/// Chordex service configuration / Chordex服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChordexConfig {
    /// HTTP server configuration / HTTP服务器配置
    pub http: ServerConfig,
    /// Logging configuration / 日志配置
    pub log: LogConfig,
    /// Musical catalog JSON path / 音乐目录JSON路径
    pub catalog_path: String,
    /// Fallback API key JSON path / 备用API密钥JSON路径
    pub api_key_path: String,
    /// Gemini backend configuration / Gemini后端配置
    pub gemini: GeminiConfig,
}

/// Gemini backend configuration / Gemini后端配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// API endpoint base URL / API端点基础URL
    pub endpoint: String,
    /// Model name / 模型名称
    pub model: String,
    /// Outbound request timeout in seconds, unbounded when unset
    /// 出站请求超时时间（秒），未设置时不限制
    pub request_timeout_secs: Option<u64>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-pro".to_string(),
            request_timeout_secs: None,
        }
    }
}

impl Default for ChordexConfig {
    fn default() -> Self {
        Self {
            http: ServerConfig::default(),
            log: LogConfig::default(),
            catalog_path: "config.json".to_string(),
            api_key_path: "api_config.json".to_string(),
            gemini: GeminiConfig::default(),
        }
    }
}

impl ChordexConfig {
    /// Load configuration with CLI arguments override / 使用CLI参数覆盖加载配置
    ///
    /// Precedence order (highest to lowest):
    /// 优先级顺序（从高到低）：
    /// 1. Command line arguments / 命令行参数
    /// 2. Environment variables (`CHORDEX_`, `__` as separator) / 环境变量
    /// 3. Configuration file / 配置文件
    /// 4. Default values / 默认值
    pub fn load_with_cli(args: &CliArgs) -> Result<Self> {
        let config_file = args.config.as_deref().unwrap_or("config.toml");
        if args.config.is_some() && !std::path::Path::new(config_file).exists() {
            tracing::info!("Config file '{}' not found, using defaults", config_file);
        }

        let mut config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed("CHORDEX_").split("__"))
            .extract()
            .context("Failed to load configuration")?;

        // Override with CLI arguments / 使用CLI参数覆盖
        if let Some(http_addr) = &args.http_addr {
            config.http.addr = http_addr
                .parse()
                .with_context(|| format!("invalid http address: {}", http_addr))?;
        }

        if let Some(catalog) = &args.catalog {
            config.catalog_path = catalog.clone();
        }

        if let Some(api_key_file) = &args.api_key_file {
            config.api_key_path = api_key_file.clone();
        }

        if let Some(model) = &args.model {
            config.gemini.model = model.clone();
        }

        if let Some(log_level) = &args.log_level {
            config.log.level = log_level.clone();
        }

        Ok(config)
    }
}

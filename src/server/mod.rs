//! Chordex HTTP service module
//! Chordex HTTP服务模块
//!
//! This module contains all service functionality including:
//! 此模块包含所有服务功能，包括：
//!
//! - Musical catalog loading / 音乐目录加载
//! - Gemini API key resolution / Gemini API密钥解析
//! - HTTP routes and handlers / HTTP路由与处理器
//! - Prompt construction / 提示词构建
//!
//! ## Module Structure / 模块结构
//!
//! - `config`: Service configuration / 服务配置
//! - `catalog`: Musical catalog loading / 音乐目录加载
//! - `credentials`: API key resolution / API密钥解析
//! - `handlers`: HTTP request handlers / HTTP请求处理器
//! - `prompt`: Prompt construction / 提示词构建
//! - `http_gateway`: HTTP gateway implementation / HTTP网关实现

pub mod catalog;
pub mod config;
pub mod credentials;
pub mod gateway;
pub mod handlers;
pub mod http_gateway;
pub mod prompt;
pub mod routes;

#[cfg(test)]
pub mod config_test;

// Re-export commonly used types / 重新导出常用类型
pub use catalog::MusicCatalog;
pub use gateway::{create_gateway_router, GatewayState};
pub use http_gateway::HttpGateway;

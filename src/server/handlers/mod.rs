//! HTTP handlers for the Chordex service
//! Chordex服务的HTTP处理器
//!
//! This module contains HTTP request handlers for the API endpoints
//! 此模块包含API端点的HTTP请求处理器

pub mod catalog;
pub mod health;
pub mod progressions;

// Re-export all public items from each module / 重新导出每个模块的所有公共项
pub use catalog::*;
pub use health::*;
pub use progressions::*;

//! HTTP routes for the Chordex service
//! Chordex服务的HTTP路由
//!
//! This module defines all HTTP routes and their mappings to handlers
//! 此模块定义所有HTTP路由及其到处理器的映射

use axum::{routing::get, Router};

use super::gateway::GatewayState;
use super::handlers::{get_catalog, get_chord_progressions, health_check};

/// Create HTTP routes / 创建HTTP路由
pub(crate) fn create_routes(state: GatewayState) -> Router {
    Router::new()
        // Catalog endpoint / 目录端点
        .route("/api/config", get(get_catalog))
        // Chord progression generation endpoint / 和弦进行生成端点
        .route("/api/chord-progressions", get(get_chord_progressions))
        // Health check endpoint / 健康检查端点
        .route("/health", get(health_check))
        .with_state(state)
}

//! HTTP gateway state and router for the Chordex service
//! Chordex服务的HTTP网关状态与路由器

use axum::http::{header, HeaderName};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use super::catalog::MusicCatalog;
use super::routes::create_routes;
use crate::gemini::TextGenerator;

/// HTTP gateway state / HTTP网关状态
///
/// Both fields are fixed at startup and shared read-only across
/// requests. `generator` is absent when no usable API key was
/// resolved; `catalog` is absent only in handler tests.
/// 两个字段在启动时确定，请求间以只读方式共享。未解析出可用API密钥时
/// `generator`为空；`catalog`仅在处理器测试中为空。
#[derive(Clone)]
pub struct GatewayState {
    pub catalog: Option<Arc<MusicCatalog>>,
    pub generator: Option<Arc<dyn TextGenerator>>,
}

/// Create HTTP gateway router / 创建HTTP网关路由器
pub fn create_gateway_router(state: GatewayState) -> Router {
    create_routes(state).layer(cors_layer()) // Add CORS support / 添加CORS支持
}

// Browser callers are served from any origin / 允许任意来源的浏览器调用
fn cors_layer() -> CorsLayer {
    CorsLayer::new().allow_origin(Any).allow_headers([
        header::ORIGIN,
        HeaderName::from_static("x-requested-with"),
        header::CONTENT_TYPE,
        header::ACCEPT,
    ])
}

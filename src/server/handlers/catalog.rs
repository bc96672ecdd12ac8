//! Catalog HTTP handler for the Chordex service
//! Chordex服务的目录HTTP处理器

use axum::{extract::State, response::Json};
use serde_json::json;

use crate::server::gateway::GatewayState;

/// Serve the musical catalog / 提供音乐目录
///
/// Returns the keys and types loaded at startup, unchanged across
/// calls. An unloaded catalog serializes as an empty object.
/// 返回启动时加载的调与风格，调用间不变。未加载的目录序列化为空对象。
pub async fn get_catalog(State(state): State<GatewayState>) -> Json<serde_json::Value> {
    match state.catalog.as_deref() {
        Some(catalog) => Json(serde_json::to_value(catalog).unwrap_or_else(|_| json!({}))),
        None => Json(json!({})),
    }
}

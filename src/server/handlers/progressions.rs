//! Chord progression HTTP handler for the Chordex service
//! Chordex服务的和弦进行HTTP处理器

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::server::gateway::GatewayState;
use crate::server::prompt::chord_progressions_prompt;

/// Query parameters for chord progression requests / 和弦进行请求的查询参数
#[derive(Debug, Deserialize)]
pub struct ProgressionsQuery {
    pub key: Option<String>,
    #[serde(rename = "musicType")]
    pub music_type: Option<String>,
}

/// Serve chord progressions for a key and music type / 为调与风格提供和弦进行
///
/// Precondition checks run in a fixed order, each short-circuiting:
/// missing client, missing parameters, missing catalog, unknown
/// values. Only fully validated requests reach the backend.
/// 前置检查按固定顺序执行，每项都会短路：客户端缺失、参数缺失、
/// 目录缺失、值未知。只有完全验证的请求才会到达后端。
pub async fn get_chord_progressions(
    State(state): State<GatewayState>,
    Query(query): Query<ProgressionsQuery>,
) -> (StatusCode, Json<serde_json::Value>) {
    let Some(generator) = state.generator.as_ref() else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "error": "Gemini API client not initialized. Check server logs for API key issues."
            })),
        );
    };

    // Empty values count as missing / 空值视为缺失
    let key = query.key.as_deref().filter(|s| !s.is_empty());
    let music_type = query.music_type.as_deref().filter(|s| !s.is_empty());
    let (Some(key), Some(music_type)) = (key, music_type) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing key or musicType query parameters." })),
        );
    };

    let Some(catalog) = state.catalog.as_deref() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Server musical key/type configuration not loaded." })),
        );
    };

    if !catalog.has_musical_key(key) || !catalog.has_music_type(music_type) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Invalid key or musicType." })),
        );
    }

    info!("Requesting chord progressions for key={} musicType={}", key, music_type);

    let prompt = chord_progressions_prompt(key, music_type);
    match generator.generate(&prompt).await {
        Ok(text) => {
            // Pass structured model output through untouched; wrap
            // anything else / 结构化的模型输出原样透传；其余内容包装返回
            let body = match serde_json::from_str::<serde_json::Value>(&text) {
                Ok(value) => value,
                Err(_) => json!({ "progressions_text": text }),
            };
            (StatusCode::OK, Json(body))
        }
        Err(e) => {
            // The backend error is logged, never echoed to the caller
            // 后端错误只记录日志，不回显给调用者
            error!("Error calling Gemini API: {}", e);
            if e.is_credential_error() {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({
                        "error": "Gemini API key not valid. Please check server configuration (environment variable or api_config.json)."
                    })),
                )
            } else {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to get chord progressions from Gemini API." })),
                )
            }
        }
    }
}

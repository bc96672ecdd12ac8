//! Gemini API key resolution
//! Gemini API密钥解析
//!
//! The key is looked up in the `GEMINI_API_KEY` environment variable
//! first, then in a local JSON file. Resolution never fails: when no
//! usable key is found a placeholder is substituted and the service
//! runs in degraded mode where generation requests are refused.
//! 密钥先从`GEMINI_API_KEY`环境变量查找，然后从本地JSON文件查找。
//! 解析永不失败：找不到可用密钥时替换为占位符，服务以降级模式运行，
//! 生成请求将被拒绝。

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, warn};

/// Environment variable holding the Gemini API key / 保存Gemini API密钥的环境变量
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Sentinel substituted when no usable key is found / 找不到可用密钥时替换的哨兵值
pub const PLACEHOLDER_API_KEY: &str = "YOUR_GEMINI_API_KEY_PLACEHOLDER";

// Values shipped in templates that must never reach the API
// 模板中附带的、绝不能发送到API的值
const KNOWN_PLACEHOLDERS: [&str; 2] = ["YOUR_GEMINI_API_KEY_GOES_HERE", "YOUR_GEMINI_API_KEY"];

/// Fallback key file layout / 备用密钥文件结构
#[derive(Debug, Deserialize)]
struct ApiKeyFile {
    #[serde(rename = "geminiApiKey")]
    gemini_api_key: Option<String>,
}

/// Whether a resolved key is the degraded-mode sentinel / 解析出的密钥是否为降级模式哨兵
pub fn is_placeholder(api_key: &str) -> bool {
    api_key == PLACEHOLDER_API_KEY
}

/// Resolve the Gemini API key, falling back to a placeholder
/// 解析Gemini API密钥，找不到时回退到占位符
pub fn resolve_api_key(file_path: &Path) -> String {
    resolve_from(std::env::var(GEMINI_API_KEY_ENV).ok(), file_path)
}

fn resolve_from(env_value: Option<String>, file_path: &Path) -> String {
    let mut api_key = env_value.filter(|v| !v.is_empty());

    if api_key.is_some() {
        info!(
            "Gemini API key loaded from {} environment variable",
            GEMINI_API_KEY_ENV
        );
    } else if let Some(file_key) = read_key_file(file_path) {
        info!("Gemini API key loaded from {}", file_path.display());
        api_key = Some(file_key);
    }

    match api_key {
        Some(key) if !KNOWN_PLACEHOLDERS.contains(&key.as_str()) => key,
        _ => {
            warn!("Gemini API key is not configured or using a placeholder");
            warn!(
                "Set the {} environment variable or create {} with your key",
                GEMINI_API_KEY_ENV,
                file_path.display()
            );
            warn!("The service will run with limited functionality (Gemini calls will fail)");
            PLACEHOLDER_API_KEY.to_string()
        }
    }
}

// Read errors and parse errors count as "file absent" / 读取与解析错误按"文件不存在"处理
fn read_key_file(path: &Path) -> Option<String> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            debug!("Could not read API key file {}: {}", path.display(), e);
            return None;
        }
    };
    match serde_json::from_str::<ApiKeyFile>(&raw) {
        Ok(file) => file.gemini_api_key.filter(|k| !k.is_empty()),
        Err(e) => {
            debug!("Could not parse API key file {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_env_value_wins() {
        // Environment variable takes precedence over the file / 环境变量优先于文件
        let dir = tempdir().unwrap();
        let path = dir.path().join("api_config.json");
        fs::write(&path, r#"{"geminiApiKey": "file-key"}"#).unwrap();

        let key = resolve_from(Some("env-key".to_string()), &path);
        assert_eq!(key, "env-key");
    }

    #[test]
    fn test_empty_env_value_falls_back_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("api_config.json");
        fs::write(&path, r#"{"geminiApiKey": "file-key"}"#).unwrap();

        let key = resolve_from(Some(String::new()), &path);
        assert_eq!(key, "file-key");
    }

    #[test]
    fn test_file_fallback() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("api_config.json");
        fs::write(&path, r#"{"geminiApiKey": "file-key"}"#).unwrap();

        let key = resolve_from(None, &path);
        assert_eq!(key, "file-key");
    }

    #[test]
    fn test_no_sources_yields_placeholder() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-file.json");

        let key = resolve_from(None, &path);
        assert_eq!(key, PLACEHOLDER_API_KEY);
        assert!(is_placeholder(&key));
    }

    #[test]
    fn test_unreadable_file_counts_as_absent() {
        // A malformed key file must not abort startup / 密钥文件格式错误不得中止启动
        let dir = tempdir().unwrap();
        let path = dir.path().join("api_config.json");
        fs::write(&path, "not json at all").unwrap();

        let key = resolve_from(None, &path);
        assert_eq!(key, PLACEHOLDER_API_KEY);
    }

    #[test]
    fn test_file_without_key_field_yields_placeholder() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("api_config.json");
        fs::write(&path, r#"{"somethingElse": "x"}"#).unwrap();

        let key = resolve_from(None, &path);
        assert_eq!(key, PLACEHOLDER_API_KEY);
    }

    #[test]
    fn test_known_placeholder_values_are_rejected() {
        // Template values from either source are replaced by the sentinel
        // 来自任一来源的模板值都会被替换为哨兵值
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-file.json");

        let key = resolve_from(Some("YOUR_GEMINI_API_KEY_GOES_HERE".to_string()), &path);
        assert_eq!(key, PLACEHOLDER_API_KEY);

        let key = resolve_from(Some("YOUR_GEMINI_API_KEY".to_string()), &path);
        assert_eq!(key, PLACEHOLDER_API_KEY);

        let file_path = dir.path().join("api_config.json");
        fs::write(&file_path, r#"{"geminiApiKey": "YOUR_GEMINI_API_KEY"}"#).unwrap();
        let key = resolve_from(None, &file_path);
        assert_eq!(key, PLACEHOLDER_API_KEY);
    }

    #[test]
    fn test_real_key_is_not_placeholder() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-file.json");

        let key = resolve_from(Some("AIza-real-key".to_string()), &path);
        assert_eq!(key, "AIza-real-key");
        assert!(!is_placeholder(&key));
    }
}

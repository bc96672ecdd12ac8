//! Tests for Chordex configuration / Chordex配置测试

#[cfg(test)]
mod tests {
    use super::super::config::*;
    use std::fs;
    use tempfile::tempdir;

    fn empty_args() -> CliArgs {
        CliArgs {
            config: None,
            http_addr: None,
            catalog: None,
            api_key_file: None,
            model: None,
            log_level: None,
        }
    }

    #[test]
    fn test_chordex_config_default() {
        // Test default configuration / 测试默认配置
        let config = ChordexConfig::default();

        assert_eq!(config.http.addr.port(), 8080);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.catalog_path, "config.json");
        assert_eq!(config.api_key_path, "api_config.json");
        assert_eq!(
            config.gemini.endpoint,
            "https://generativelanguage.googleapis.com"
        );
        assert_eq!(config.gemini.model, "gemini-pro");
        // The outbound call is unbounded unless an operator opts in
        // 除非运维明确选择，出站调用不限时
        assert_eq!(config.gemini.request_timeout_secs, None);
    }

    #[test]
    fn test_load_with_defaults() {
        // No file and no overrides yields defaults / 无文件无覆盖时得到默认值
        let args = empty_args();
        let config = ChordexConfig::load_with_cli(&args).unwrap();

        assert_eq!(config.http.addr.port(), 8080);
        assert_eq!(config.gemini.model, "gemini-pro");
    }

    #[test]
    fn test_load_from_toml_file() {
        // Values from the TOML file override defaults / TOML文件中的值覆盖默认值
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
catalog_path = "data/catalog.json"

[http]
addr = "127.0.0.1:9090"

[log]
level = "debug"

[gemini]
model = "gemini-1.5-flash"
request_timeout_secs = 30
"#,
        )
        .unwrap();

        let mut args = empty_args();
        args.config = Some(path.to_string_lossy().to_string());
        let config = ChordexConfig::load_with_cli(&args).unwrap();

        assert_eq!(config.http.addr.to_string(), "127.0.0.1:9090");
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.catalog_path, "data/catalog.json");
        assert_eq!(config.gemini.model, "gemini-1.5-flash");
        assert_eq!(config.gemini.request_timeout_secs, Some(30));
        // Untouched sections keep their defaults / 未设置的部分保持默认值
        assert_eq!(config.api_key_path, "api_config.json");
    }

    #[test]
    fn test_cli_overrides_file() {
        // CLI arguments take precedence over the file / CLI参数优先于文件
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[http]
addr = "127.0.0.1:9090"
"#,
        )
        .unwrap();

        let mut args = empty_args();
        args.config = Some(path.to_string_lossy().to_string());
        args.http_addr = Some("0.0.0.0:7000".to_string());
        args.catalog = Some("elsewhere.json".to_string());
        args.model = Some("gemini-ultra".to_string());
        args.log_level = Some("trace".to_string());

        let config = ChordexConfig::load_with_cli(&args).unwrap();

        assert_eq!(config.http.addr.to_string(), "0.0.0.0:7000");
        assert_eq!(config.catalog_path, "elsewhere.json");
        assert_eq!(config.gemini.model, "gemini-ultra");
        assert_eq!(config.log.level, "trace");
    }

    #[test]
    fn test_invalid_http_addr_is_rejected() {
        let mut args = empty_args();
        args.http_addr = Some("not-an-address".to_string());

        assert!(ChordexConfig::load_with_cli(&args).is_err());
    }
}

//! Musical catalog loading for the Chordex service
//! Chordex服务的音乐目录加载
//!
//! The catalog is the static list of recognized musical keys and music
//! types. It is loaded once at startup and never mutated afterwards;
//! a missing or malformed catalog is a fatal startup error.
//! 目录是认可的音乐调与音乐风格的静态列表。它在启动时加载一次，
//! 之后不再修改；目录缺失或格式错误是致命的启动错误。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Catalog of recognized musical keys and music types / 认可的音乐调与风格目录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MusicCatalog {
    /// Recognized musical keys, in display order / 认可的音乐调，按显示顺序
    #[serde(rename = "musicalKeys")]
    pub musical_keys: Vec<String>,
    /// Recognized music types, in display order / 认可的音乐风格，按显示顺序
    #[serde(rename = "musicTypes")]
    pub music_types: Vec<String>,
}

impl MusicCatalog {
    /// Load the catalog from a JSON document / 从JSON文档加载目录
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read catalog file: {}", path.display()))?;
        let catalog: Self = serde_json::from_str(&raw)
            .with_context(|| format!("parse catalog file: {}", path.display()))?;
        Ok(catalog)
    }

    /// Membership check for a musical key / 音乐调的成员检查
    pub fn has_musical_key(&self, key: &str) -> bool {
        self.musical_keys.iter().any(|k| k == key)
    }

    /// Membership check for a music type / 音乐风格的成员检查
    pub fn has_music_type(&self, music_type: &str) -> bool {
        self.music_types.iter().any(|t| t == music_type)
    }
}

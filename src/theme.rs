//! テーマ設定の永続化
//!
//! `<data dir>/theme.json` に `{"theme": "light"}` のように保存する。
//! ファイルが無い・壊れている場合は未設定（既定のダーク）として扱う。

use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tempfile::NamedTempFile;

/// テーマ
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ShelfError::Theme(format!(
                "Unknown theme '{}'. Expected 'light' or 'dark'",
                other
            ))),
        }
    }
}

/// theme.json のルート構造
#[derive(Debug, Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

/// テーマ設定ストア
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    /// 既定パスで作成
    pub fn new() -> Result<Self> {
        let dir = crate::env::data_dir().map_err(ShelfError::Theme)?;
        Ok(Self::with_path(dir.join("theme.json")))
    }

    /// カスタムパスで作成（テスト用）
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 保存済みの設定（未設定・読み込み不可なら None）
    pub fn load(&self) -> Option<Theme> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read theme");
                return None;
            }
        };

        match serde_json::from_str::<ThemeFile>(&content) {
            Ok(file) => Some(file.theme),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring invalid theme file");
                None
            }
        }
    }

    /// 実際に適用するテーマ
    pub fn effective(&self) -> Theme {
        self.load().unwrap_or_default()
    }

    /// テーマを保存
    pub fn set(&self, theme: Theme) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let parent = self.path.parent().unwrap_or(Path::new("."));
        let mut temp_file = NamedTempFile::new_in(parent)
            .map_err(|e| ShelfError::Theme(format!("Failed to create temp file: {}", e)))?;

        let content = serde_json::to_string_pretty(&ThemeFile { theme })?;
        temp_file.write_all(content.as_bytes())?;

        temp_file
            .persist(&self.path)
            .map_err(|e| ShelfError::Theme(format!("Failed to persist theme: {}", e)))?;

        tracing::info!(%theme, path = %self.path().display(), "theme saved");
        Ok(())
    }

    /// 現在のテーマを反転して保存
    pub fn toggle(&self) -> Result<Theme> {
        let next = self.effective().toggled();
        self.set(next)?;
        Ok(next)
    }
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;

//! HTTP設定とユーザー設定
//!
//! `<data dir>/config.toml` を読み込み、データソースと HTTP 設定を決める。
//! データソースの優先順位: CLI 引数 > 環境変数 `SHELF_SOURCE` > 設定ファイル > 既定値

use crate::env::{EnvVar, SHELF_SOURCE};
use crate::error::{Result, ShelfError};
use reqwest::Client;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// 既定のデータソース
pub const DEFAULT_SOURCE: &str = "assets/products.json";

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト（秒）
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(30)),
            user_agent: "shelf-cli".to_string(),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// config.toml の内容
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShelfConfig {
    /// 商品 JSON の URL またはファイルパス
    pub source: Option<String>,
    /// HTTP タイムアウト（秒）
    pub timeout_secs: Option<u64>,
    /// User-Agent
    pub user_agent: Option<String>,
}

impl ShelfConfig {
    /// 既定パス（`<data dir>/config.toml`）から読み込む
    pub fn load() -> Result<Self> {
        let dir = crate::env::data_dir().map_err(ShelfError::Config)?;
        Self::load_from(&dir.join("config.toml"))
    }

    /// 指定パスから読み込む（存在しなければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ShelfError::Io(e)),
        };

        toml::from_str(&content).map_err(|e| {
            ShelfError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// HTTP 設定を組み立てる
    pub fn http_config(&self) -> HttpConfig {
        let mut http = HttpConfig::default();
        if let Some(secs) = self.timeout_secs {
            http.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }
        if let Some(agent) = self.user_agent.as_ref().filter(|a| !a.is_empty()) {
            http.user_agent = agent.clone();
        }
        http
    }

    /// データソースを決定
    pub fn resolve_source(&self, cli: Option<&str>) -> String {
        cli.filter(|s| !s.is_empty())
            .map(str::to_string)
            .or_else(|| EnvVar::get(SHELF_SOURCE))
            .or_else(|| self.source.clone().filter(|s| !s.is_empty()))
            .unwrap_or_else(|| DEFAULT_SOURCE.to_string())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

//! カタログのデータソース
//!
//! URL またはローカルファイルから商品 JSON 配列を1回だけ読み込む。

use crate::catalog::Product;
use crate::config::HttpConfig;
use crate::error::{Result, ShelfError};
use crate::http;
use std::fmt;
use std::path::PathBuf;

/// データソース
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Url(String),
    File(PathBuf),
}

impl CatalogSource {
    /// `http://` / `https://` で始まれば URL、それ以外はファイルパス
    pub fn parse(input: &str) -> Self {
        let lower = input.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            CatalogSource::Url(input.to_string())
        } else {
            CatalogSource::File(PathBuf::from(input))
        }
    }

    /// エラーメッセージ用の名前（末尾要素）
    pub fn name(&self) -> String {
        match self {
            CatalogSource::Url(url) => http::resource_name(url),
            CatalogSource::File(path) => http::resource_name(&path.to_string_lossy()),
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Url(url) => f.write_str(url),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// 商品一覧を読み込む
pub async fn load_products(source: &CatalogSource, config: &HttpConfig) -> Result<Vec<Product>> {
    tracing::info!(%source, name = %source.name(), "loading catalog");

    let bytes = match source {
        CatalogSource::Url(url) => {
            let client = config.build_client();
            http::fetch_fresh(&client, url).await?
        }
        CatalogSource::File(path) => tokio::fs::read(path).await?,
    };

    parse_products(&bytes)
}

/// JSON 配列を商品一覧として解釈
pub fn parse_products(bytes: &[u8]) -> Result<Vec<Product>> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    if !value.is_array() {
        return Err(ShelfError::InvalidCatalog(
            "expected a JSON array of products".to_string(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;

//! データソース指定の共通引数

use crate::catalog::{Product, LOAD_FAILURE_HINT};
use crate::config::ShelfConfig;
use crate::error::ShelfError;
use crate::source::{load_products, CatalogSource};

#[derive(Debug, Clone, clap::Args)]
pub struct SourceArgs {
    /// Catalog JSON location (URL or file path). Defaults to SHELF_SOURCE,
    /// the `source` key of config.toml, then assets/products.json
    #[arg(long, short = 's')]
    pub source: Option<String>,
}

impl SourceArgs {
    /// 設定を解決してカタログを1回だけ読み込む
    pub async fn fetch(&self) -> Result<Vec<Product>, ShelfError> {
        let config = ShelfConfig::load()?;
        let source = CatalogSource::parse(&config.resolve_source(self.source.as_deref()));
        load_products(&source, &config.http_config()).await
    }
}

/// 読み込み失敗のメッセージ（それ以外のエラーはそのまま）
pub fn failure_message(err: &ShelfError) -> String {
    if err.is_load_failure() {
        format!("{}\nError: {}", LOAD_FAILURE_HINT, err)
    } else {
        err.to_string()
    }
}

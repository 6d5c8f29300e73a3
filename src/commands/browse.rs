//! shelf browse コマンド
//!
//! カタログを読み込み、インタラクティブなブラウザを起動する。
//! 読み込みに失敗した場合もブラウザは起動し、エラー表示のみ行う。

use super::source_args::SourceArgs;
use crate::catalog::CatalogStore;
use crate::clipboard::SystemClipboard;
use crate::theme::ThemeStore;
use crate::tui;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Append logs to this file while the browser is running
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn run(args: Args) -> Result<(), String> {
    let mut store = CatalogStore::new();
    match args.source.fetch().await {
        Ok(products) => store.load(products),
        Err(e) if e.is_load_failure() => store.fail(e.to_string()),
        Err(e) => return Err(e.to_string()),
    }

    let themes = ThemeStore::new().map_err(|e| e.to_string())?;
    tui::run(store, &themes, &SystemClipboard).map_err(|e| e.to_string())
}

use clap::{Parser, Subcommand};

use crate::commands::{browse, categories, copy, list, theme};

#[derive(Debug, Parser)]
#[command(name = "shelf")]
#[command(about = "Product catalog browser", long_about = None)]
pub struct Cli {
    /// Log level filter (overridden by SHELF_LOG)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// カタログをインタラクティブに閲覧
    Browse(browse::Args),

    /// 絞り込み結果の一覧
    List(list::Args),

    /// カテゴリ一覧
    Categories(categories::Args),

    /// テーマ設定
    Theme(theme::Args),

    /// 商品リンクをクリップボードへコピー
    Copy(copy::Args),
}

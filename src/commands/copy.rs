//! shelf copy コマンド
//!
//! 商品のリンクをクリップボードへコピーする。コピーできない環境では
//! リンクを表示して手動コピーを促す。

use super::source_args::{failure_message, SourceArgs};
use crate::catalog::CatalogStore;
use crate::clipboard::{copy_link, SystemClipboard};
use crate::error::ShelfError;
use crate::output::StatusLine;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    /// Product id
    pub id: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

pub async fn run(args: Args) -> Result<(), String> {
    let products = args.source.fetch().await.map_err(|e| failure_message(&e))?;
    let store = CatalogStore::with_products(products);

    let product = store
        .find_by_id(&args.id)
        .ok_or_else(|| ShelfError::ProductNotFound(args.id.clone()).to_string())?;

    let outcome = copy_link(product.affiliate_url(), &SystemClipboard);
    println!("{}", StatusLine::copy(&outcome, &args.id));
    Ok(())
}

//! shelf list コマンド
//!
//! 検索語・カテゴリで絞り込んだ商品を表示する。

use super::source_args::{failure_message, SourceArgs};
use crate::catalog::{CatalogStore, CategoryFilter, Product, LOAD_FAILURE_HINT};
use crate::render::html::{render_error, render_grid, render_hint, UNTITLED};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;

#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Search text (case-insensitive substring of title, description, category and id)
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Category to show ("all" for every category)
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Shuffle the filtered results
    #[arg(long)]
    pub shuffle: bool,

    /// Output in JSON format
    #[arg(long, conflicts_with_all = ["simple", "html"])]
    pub json: bool,

    /// Output only product titles
    #[arg(long, conflicts_with_all = ["json", "html"])]
    pub simple: bool,

    /// Output escaped HTML product cards
    #[arg(long, conflicts_with_all = ["json", "simple"])]
    pub html: bool,
}

pub async fn run(args: Args) -> Result<(), String> {
    // 1. カタログを読み込む
    let products = match args.source.fetch().await {
        Ok(products) => products,
        Err(e) => {
            if args.html && e.is_load_failure() {
                print!(
                    "{}{}",
                    render_hint(LOAD_FAILURE_HINT),
                    render_error(&e.to_string())
                );
            }
            return Err(failure_message(&e));
        }
    };

    // 2. 絞り込み（必要ならシャッフル）
    let store = build_view(products, &args);
    let view = store.view();
    let hint = store.result_hint();

    // 3. 出力
    if args.json {
        print_json(&view)?;
    } else if args.simple {
        print_simple(&view);
    } else if args.html {
        print!("{}{}", render_hint(&hint), render_grid(&view));
    } else {
        print_table(&view);
        println!("{}", hint.dimmed());
    }

    Ok(())
}

/// 引数に従ってビューを作る
fn build_view(products: Vec<Product>, args: &Args) -> CatalogStore {
    let mut store = CatalogStore::with_products(products);
    store.set_query(args.query.as_str());
    store.set_category(CategoryFilter::from(args.category.as_str()));
    if args.shuffle {
        store.shuffle();
    }
    store
}

fn print_json(products: &[&Product]) -> Result<(), String> {
    // 空の場合も [] を出力
    serde_json::to_string_pretty(products)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize products: {}", e))
}

fn print_simple(products: &[&Product]) {
    for product in products {
        println!("{}", display_title(product));
    }
}

fn print_table(products: &[&Product]) {
    if products.is_empty() {
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Title", "Category", "Link"]);

    for product in products {
        table.add_row(vec![
            or_dash(product.id()),
            display_title(product),
            or_dash(product.category()),
            or_dash(product.affiliate_url()),
        ]);
    }

    println!("{table}");
}

fn display_title(product: &Product) -> &str {
    match product.title() {
        "" => UNTITLED,
        title => title,
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;

//! shelf categories コマンド

use super::source_args::{failure_message, SourceArgs};
use crate::catalog::unique_categories;
use crate::render::category_options;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;

#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// 出力用のカテゴリ選択肢
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct CategoryOption {
    value: String,
    label: String,
}

pub async fn run(args: Args) -> Result<(), String> {
    let products = args.source.fetch().await.map_err(|e| failure_message(&e))?;
    let options = to_options(category_options(&unique_categories(&products)));

    if args.json {
        serde_json::to_string_pretty(&options)
            .map(|json| println!("{json}"))
            .map_err(|e| format!("Failed to serialize categories: {}", e))
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Value", "Label"]);
        for option in &options {
            table.add_row(vec![option.value.as_str(), option.label.as_str()]);
        }
        println!("{table}");
        Ok(())
    }
}

fn to_options(pairs: Vec<(String, String)>) -> Vec<CategoryOption> {
    pairs
        .into_iter()
        .map(|(value, label)| CategoryOption { value, label })
        .collect()
}

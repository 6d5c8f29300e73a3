//! shelf theme コマンド
//!
//! ライト/ダークのテーマ設定を表示・切替する。

use crate::output::StatusLine;
use crate::theme::{Theme, ThemeStore};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<ThemeCommand>,
}

#[derive(Debug, Subcommand)]
pub enum ThemeCommand {
    /// Show the current theme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Set the theme explicitly
    Set {
        #[arg(value_enum)]
        theme: Theme,
    },
}

pub async fn run(args: Args) -> Result<(), String> {
    let store = ThemeStore::new().map_err(|e| e.to_string())?;

    let line = match args.command.unwrap_or(ThemeCommand::Show) {
        ThemeCommand::Show => match store.load() {
            Some(theme) => StatusLine::theme(theme, true),
            None => StatusLine::theme(Theme::default(), false),
        },
        ThemeCommand::Toggle => {
            let theme = store.toggle().map_err(|e| e.to_string())?;
            StatusLine::theme(theme, true)
        }
        ThemeCommand::Set { theme } => {
            store.set(theme).map_err(|e| e.to_string())?;
            StatusLine::theme(theme, true)
        }
    };

    println!("{line}");
    Ok(())
}

mod catalog;
mod cli;
mod clipboard;
mod commands;
mod config;
mod env;
mod error;
mod http;
mod logging;
mod output;
mod render;
mod source;
mod theme;
mod tui;

use clap::Parser;
use cli::Command;
use logging::LogTarget;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // TUI は端末を占有するため、ログはファイル指定時のみ出力
    let target = match &cli.command {
        Command::Browse(args) => args
            .log_file
            .as_deref()
            .map(LogTarget::File)
            .unwrap_or(LogTarget::Discard),
        _ => LogTarget::Stderr,
    };
    if let Err(err) = logging::init(&cli.log_level, target) {
        eprintln!("{err}");
        std::process::exit(1);
    }

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

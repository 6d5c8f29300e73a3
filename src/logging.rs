//! ログ初期化
//!
//! ユーザー向け出力は stdout、ログは stderr（またはファイル）に分ける。

use crate::env::{EnvVar, SHELF_LOG};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// ログの出力先
pub enum LogTarget<'a> {
    /// 標準エラー出力
    Stderr,
    /// ファイルへ追記
    File(&'a Path),
    /// 破棄（TUI が端末を占有している間）
    Discard,
}

/// フィルタを組み立てる（`SHELF_LOG` が指定レベルより優先）
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(EnvVar::get(SHELF_LOG).unwrap_or_else(|| level.to_string()))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// グローバルサブスクライバを設定
pub fn init(level: &str, target: LogTarget<'_>) -> Result<(), String> {
    let writer = match target {
        LogTarget::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogTarget::Discard => BoxMakeWriter::new(std::io::sink),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| format!("Failed to open log file {}: {}", path.display(), e))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
    };

    // 既に設定済み（テスト等）の場合は無視
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .try_init();

    Ok(())
}

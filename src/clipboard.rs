//! クリップボード連携
//!
//! 商品リンクをシステムクリップボードへコピーする。失敗時は手動コピー用の
//! プロンプトにフォールバックし、エラーとしては扱わない。

use crate::error::{Result, ShelfError};
use std::io::Write;
use std::process::{Command, Stdio};

/// 手動コピー時のプロンプト文言
pub const PROMPT_MESSAGE: &str = "Copy this affiliate link:";

/// コピー成功時の表示
pub const COPIED_LABEL: &str = "Copied ✓";

/// クリップボード書き込みの抽象
pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<()>;
}

/// コピー操作の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// クリップボードへコピーした
    Copied,
    /// コピーできなかったため手動コピーを促す
    Prompt(String),
    /// 空リンク・プレースホルダーのため何もしない
    Skipped,
}

/// リンクをコピー（空文字列と `#` は無視）
pub fn copy_link(link: &str, clipboard: &dyn Clipboard) -> CopyOutcome {
    if link.is_empty() || link == "#" {
        return CopyOutcome::Skipped;
    }

    match clipboard.copy(link) {
        Ok(()) => {
            tracing::debug!(link, "link copied");
            CopyOutcome::Copied
        }
        Err(e) => {
            tracing::warn!(error = %e, "clipboard unavailable, falling back to prompt");
            CopyOutcome::Prompt(link.to_string())
        }
    }
}

/// OS のクリップボードコマンドを使う実装
/// - macOS: pbcopy
/// - Linux: xclip または xsel
/// - Windows: clip.exe
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        #[cfg(target_os = "macos")]
        {
            pipe_to(Command::new("pbcopy"), text)
        }

        #[cfg(target_os = "linux")]
        {
            let mut xclip = Command::new("xclip");
            xclip.args(["-selection", "clipboard"]);
            pipe_to(xclip, text).or_else(|_| {
                let mut xsel = Command::new("xsel");
                xsel.args(["--clipboard", "--input"]);
                pipe_to(xsel, text)
            })
        }

        #[cfg(target_os = "windows")]
        {
            pipe_to(Command::new("clip"), text)
        }

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            let _ = text;
            Err(ShelfError::Clipboard(
                "Clipboard not supported on this platform".to_string(),
            ))
        }
    }
}

/// コマンドの標準入力へ書き込む
#[allow(dead_code)]
fn pipe_to(mut command: Command, text: &str) -> Result<()> {
    let program = command.get_program().to_string_lossy().into_owned();
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ShelfError::Clipboard(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| ShelfError::Clipboard(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| ShelfError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(ShelfError::Clipboard(format!("{} exited with error", program)))
    }
}

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod tests;

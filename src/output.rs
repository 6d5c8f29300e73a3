use crate::clipboard::{CopyOutcome, PROMPT_MESSAGE};
use crate::theme::Theme;
use owo_colors::OwoColorize;
use std::fmt;

/// コマンド結果の1行表示
pub struct StatusLine {
    pub prefix: String,
    pub message: String,
}

impl StatusLine {
    /// コピー結果
    pub fn copy(outcome: &CopyOutcome, id: &str) -> Self {
        match outcome {
            CopyOutcome::Copied => Self {
                prefix: "✓".green().to_string(),
                message: format!("Copied link for '{}'", id),
            },
            CopyOutcome::Prompt(link) => Self {
                prefix: "•".yellow().to_string(),
                message: format!("{} {}", PROMPT_MESSAGE, link),
            },
            CopyOutcome::Skipped => Self {
                prefix: "•".yellow().to_string(),
                message: format!("No link to copy for '{}'", id),
            },
        }
    }

    /// テーマ表示（未設定なら既定値である旨を付ける）
    pub fn theme(theme: Theme, saved: bool) -> Self {
        let suffix = if saved { "" } else { " (default)" };
        Self {
            prefix: "✓".green().to_string(),
            message: format!("Theme: {}{}", theme.cyan(), suffix),
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.prefix, self.message)
    }
}

use super::*;
use std::cell::RefCell;

/// 書き込み内容を記録するクリップボード
struct RecordingClipboard {
    copied: RefCell<Vec<String>>,
}

impl RecordingClipboard {
    fn new() -> Self {
        Self {
            copied: RefCell::new(Vec::new()),
        }
    }
}

impl Clipboard for RecordingClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        self.copied.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// 常に失敗するクリップボード
struct BrokenClipboard;

impl Clipboard for BrokenClipboard {
    fn copy(&self, _text: &str) -> Result<()> {
        Err(ShelfError::Clipboard("no clipboard".to_string()))
    }
}

#[test]
fn test_copy_link_success() {
    let clipboard = RecordingClipboard::new();
    let outcome = copy_link("https://example.com/mug", &clipboard);
    assert_eq!(outcome, CopyOutcome::Copied);
    assert_eq!(
        clipboard.copied.borrow().as_slice(),
        &["https://example.com/mug".to_string()]
    );
}

#[test]
fn test_copy_link_failure_falls_back_to_prompt() {
    let outcome = copy_link("https://example.com/mug", &BrokenClipboard);
    assert_eq!(
        outcome,
        CopyOutcome::Prompt("https://example.com/mug".to_string())
    );
}

#[test]
fn test_copy_link_skips_empty() {
    let clipboard = RecordingClipboard::new();
    assert_eq!(copy_link("", &clipboard), CopyOutcome::Skipped);
    assert!(clipboard.copied.borrow().is_empty());
}

#[test]
fn test_copy_link_skips_placeholder() {
    let clipboard = RecordingClipboard::new();
    assert_eq!(copy_link("#", &clipboard), CopyOutcome::Skipped);
    assert!(clipboard.copied.borrow().is_empty());
}

//! カタログブラウザの Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: カタログ状態 + 画面状態
//! - `Msg`: UI イベントから変換されたメッセージ
//! - `update`: 状態更新（副作用は `Effect` として返す）

use crate::catalog::{CatalogStore, Product};
use crate::clipboard::{CopyOutcome, COPIED_LABEL};
use crate::theme::Theme;
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};

/// コピー成功表示の持続時間
pub const FLASH_DURATION: Duration = Duration::from_millis(900);

// ============================================================================
// Focus（入力フォーカス）
// ============================================================================

/// 入力フォーカス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// 商品一覧
    #[default]
    Grid,
    /// 検索欄
    Search,
}

// ============================================================================
// Msg（アプリケーションへのメッセージ）
// ============================================================================

/// アプリケーションへのメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// 終了
    Quit,
    /// 検索欄にフォーカス移動
    SearchFocus,
    /// 検索欄からフォーカス解除
    SearchUnfocus,
    /// 検索文字入力
    SearchInput(char),
    /// 検索文字削除
    SearchBackspace,
    /// 検索クリア
    SearchClear,
    /// 次のカテゴリ
    NextCategory,
    /// 前のカテゴリ
    PrevCategory,
    /// 選択を下へ
    SelectNext,
    /// 選択を上へ
    SelectPrev,
    /// 表示中の一覧をシャッフル
    Shuffle,
    /// 検索語とカテゴリをリセット
    Reset,
    /// テーマ切替
    ToggleTheme,
    /// 選択中の商品リンクをコピー
    CopySelected,
    /// コピー結果
    CopyFinished(CopyOutcome, Instant),
    /// 手動コピー用プロンプトを閉じる
    ClosePrompt,
    /// 時間経過
    Tick(Instant),
}

// ============================================================================
// Effect（run ループで実行する副作用）
// ============================================================================

/// update() の戻り値
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// リンクをクリップボードへ
    CopyLink(String),
    /// テーマを永続化
    PersistTheme(Theme),
}

// ============================================================================
// Model（アプリケーション全体の状態）
// ============================================================================

/// 一時表示メッセージ
#[derive(Debug, Clone)]
pub struct Flash {
    pub text: String,
    pub until: Instant,
}

/// アプリケーション全体の状態
pub struct Model {
    /// カタログ状態
    pub store: CatalogStore,
    /// 表示テーマ
    pub theme: Theme,
    /// 入力フォーカス
    pub focus: Focus,
    /// 一覧の選択状態
    pub list_state: ListState,
    /// 一時表示メッセージ
    pub flash: Option<Flash>,
    /// 手動コピー用プロンプト（リンク）
    pub prompt: Option<String>,
    /// フッターに表示する年
    pub year: i32,
    /// 終了フラグ
    pub should_quit: bool,
}

impl Model {
    /// 新しいモデルを作成
    pub fn new(store: CatalogStore, theme: Theme, year: i32) -> Self {
        let mut model = Self {
            store,
            theme,
            focus: Focus::Grid,
            list_state: ListState::default(),
            flash: None,
            prompt: None,
            year,
            should_quit: false,
        };
        model.select_first();
        model
    }

    /// 選択中の商品
    pub fn selected_product(&self) -> Option<&Product> {
        let idx = self.list_state.selected()?;
        self.store.view().get(idx).copied()
    }

    /// キー入力をメッセージに変換
    pub fn key_to_msg(&self, key: KeyCode) -> Option<Msg> {
        if self.prompt.is_some() {
            return match key {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Msg::ClosePrompt),
                _ => None,
            };
        }

        match self.focus {
            Focus::Search => match key {
                KeyCode::Esc if !self.store.query().is_empty() => Some(Msg::SearchClear),
                KeyCode::Esc => Some(Msg::SearchUnfocus),
                KeyCode::Down | KeyCode::Enter => Some(Msg::SearchUnfocus),
                KeyCode::Backspace => Some(Msg::SearchBackspace),
                KeyCode::Char(c) => Some(Msg::SearchInput(c)),
                _ => None,
            },
            Focus::Grid => match key {
                KeyCode::Char('q') => Some(Msg::Quit),
                KeyCode::Char('/') => Some(Msg::SearchFocus),
                KeyCode::Left | KeyCode::Char('[') => Some(Msg::PrevCategory),
                KeyCode::Right | KeyCode::Char(']') => Some(Msg::NextCategory),
                KeyCode::Up | KeyCode::Char('k') => Some(Msg::SelectPrev),
                KeyCode::Down | KeyCode::Char('j') => Some(Msg::SelectNext),
                KeyCode::Char('s') => Some(Msg::Shuffle),
                KeyCode::Char('r') => Some(Msg::Reset),
                KeyCode::Char('t') => Some(Msg::ToggleTheme),
                KeyCode::Char('c') | KeyCode::Enter => Some(Msg::CopySelected),
                _ => None,
            },
        }
    }

    fn select_first(&mut self) {
        let first = (self.store.count() > 0).then_some(0);
        self.list_state.select(first);
    }

    fn move_selection(&mut self, forward: bool) {
        let len = self.store.count();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = if forward {
            (current + 1).min(len - 1)
        } else {
            current.saturating_sub(1)
        };
        self.list_state.select(Some(next));
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) -> Effect {
    match msg {
        Msg::Quit => {
            model.should_quit = true;
        }
        Msg::SearchFocus => {
            model.focus = Focus::Search;
        }
        Msg::SearchUnfocus => {
            model.focus = Focus::Grid;
        }
        Msg::SearchInput(c) => {
            let mut query = model.store.query().to_string();
            query.push(c);
            model.store.set_query(query);
            model.select_first();
        }
        Msg::SearchBackspace => {
            let mut query = model.store.query().to_string();
            query.pop();
            model.store.set_query(query);
            model.select_first();
        }
        Msg::SearchClear => {
            model.store.set_query("");
            model.select_first();
        }
        Msg::NextCategory => {
            model.store.cycle_category(true);
            model.select_first();
        }
        Msg::PrevCategory => {
            model.store.cycle_category(false);
            model.select_first();
        }
        Msg::SelectNext => model.move_selection(true),
        Msg::SelectPrev => model.move_selection(false),
        Msg::Shuffle => {
            model.store.shuffle();
            model.select_first();
        }
        Msg::Reset => {
            model.store.reset();
            model.select_first();
        }
        Msg::ToggleTheme => {
            model.theme = model.theme.toggled();
            return Effect::PersistTheme(model.theme);
        }
        Msg::CopySelected => {
            if let Some(product) = model.selected_product() {
                return Effect::CopyLink(product.affiliate_url().to_string());
            }
        }
        Msg::CopyFinished(outcome, now) => match outcome {
            CopyOutcome::Copied => {
                model.flash = Some(Flash {
                    text: COPIED_LABEL.to_string(),
                    until: now + FLASH_DURATION,
                });
            }
            CopyOutcome::Prompt(link) => {
                model.prompt = Some(link);
            }
            CopyOutcome::Skipped => {}
        },
        Msg::ClosePrompt => {
            model.prompt = None;
        }
        Msg::Tick(now) => {
            if model.flash.as_ref().is_some_and(|f| now >= f.until) {
                model.flash = None;
            }
        }
    }
    Effect::None
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;

//! カタログブラウザ TUI
//!
//! 検索・カテゴリ絞り込み・シャッフル・リセット・テーマ切替・リンクコピーを
//! 端末上で行う。UI イベントは `app::Msg` に変換してカタログ状態に適用する。
//!
//! ## モジュール構成
//!
//! - `app`: Model/Msg/update
//! - `view`: 画面描画

mod app;
mod view;

use crate::catalog::CatalogStore;
use crate::clipboard::{copy_link, Clipboard};
use crate::theme::ThemeStore;
use app::{update, Effect, Model, Msg};
use chrono::Datelike;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{self, stdout, Stdout};
use std::time::{Duration, Instant};

/// イベント待ちの間隔（一時表示の期限判定に使う）
const TICK: Duration = Duration::from_millis(100);

/// TUI を実行
pub fn run(store: CatalogStore, themes: &ThemeStore, clipboard: &dyn Clipboard) -> io::Result<()> {
    let year = chrono::Local::now().year();
    let mut model = Model::new(store, themes.effective(), year);

    // ターミナル設定
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut model, themes, clipboard);

    // ターミナルを復元
    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

/// メインループ
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    model: &mut Model,
    themes: &ThemeStore,
    clipboard: &dyn Clipboard,
) -> io::Result<()> {
    while !model.should_quit {
        terminal.draw(|f| view::view(f, model))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(msg) = model.key_to_msg(key.code) {
                        let effect = update(model, msg);
                        run_effect(model, effect, themes, clipboard);
                    }
                }
            }
        }

        update(model, Msg::Tick(Instant::now()));
    }
    Ok(())
}

/// update() が返した副作用を実行
fn run_effect(model: &mut Model, effect: Effect, themes: &ThemeStore, clipboard: &dyn Clipboard) {
    match effect {
        Effect::None => {}
        Effect::CopyLink(link) => {
            let outcome = copy_link(&link, clipboard);
            update(model, Msg::CopyFinished(outcome, Instant::now()));
        }
        Effect::PersistTheme(theme) => {
            // 保存に失敗しても表示上の切替は維持する
            if let Err(e) = themes.set(theme) {
                tracing::warn!(error = %e, "failed to persist theme");
            }
        }
    }
}

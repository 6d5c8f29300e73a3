//! カタログブラウザの描画処理

use super::app::{Focus, Model};
use crate::catalog::Product;
use crate::clipboard::PROMPT_MESSAGE;
use crate::render::html::UNTITLED;
use crate::render::strip_control;
use crate::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};

/// テーマごとの配色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fg: Color,
    pub bg: Color,
    pub accent: Color,
    pub muted: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                fg: Color::White,
                bg: Color::Reset,
                accent: Color::Cyan,
                muted: Color::DarkGray,
                error: Color::LightRed,
            },
            Theme::Light => Self {
                fg: Color::Black,
                bg: Color::White,
                accent: Color::Blue,
                muted: Color::Gray,
                error: Color::Red,
            },
        }
    }
}

/// 画面を描画
pub fn view(f: &mut Frame, model: &mut Model) {
    let palette = Palette::for_theme(model.theme);
    let area = f.area();

    f.render_widget(Clear, area);
    f.render_widget(
        Block::default().style(Style::default().fg(palette.fg).bg(palette.bg)),
        area,
    );

    // レイアウト（ヘッダー + 検索 + カテゴリ + 件数 + 一覧 + フッター）
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // ヘッダー
            Constraint::Length(3), // 検索欄
            Constraint::Length(1), // カテゴリ
            Constraint::Length(1), // 件数
            Constraint::Min(1),    // 一覧
            Constraint::Length(1), // フッター
        ])
        .split(area);

    render_header(f, model, palette, chunks[0]);
    render_search(f, model, palette, chunks[1]);
    render_category(f, model, palette, chunks[2]);

    let hint = Paragraph::new(model.store.result_hint()).style(Style::default().fg(palette.muted));
    f.render_widget(hint, chunks[3]);

    if let Some(message) = model.store.load_error() {
        render_error(f, message, palette, chunks[4]);
    } else {
        render_grid(f, model, palette, chunks[4]);
    }

    render_footer(f, model, palette, chunks[5]);

    if let Some(link) = &model.prompt {
        render_prompt(f, link, palette, area);
    }
}

fn render_header(f: &mut Frame, model: &Model, palette: Palette, area: Rect) {
    let theme_label = match model.theme {
        Theme::Dark => "☾ dark",
        Theme::Light => "☀ light",
    };
    let line = Line::from(vec![
        Span::styled(
            " shelf ",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("· product picks  ", Style::default().fg(palette.muted)),
        Span::styled(theme_label, Style::default().fg(palette.muted)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_search(f: &mut Frame, model: &Model, palette: Palette, area: Rect) {
    let focused = model.focus == Focus::Search;
    let border_style = if focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.muted)
    };

    let query = strip_control(model.store.query());
    let content = if query.is_empty() && !focused {
        Span::styled("Press / to search", Style::default().fg(palette.muted))
    } else {
        Span::raw(query.clone())
    };

    let search = Paragraph::new(Line::from(content)).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    f.render_widget(search, area);

    if focused {
        let x = area.x.saturating_add(1).saturating_add(text_width(&query));
        f.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn render_category(f: &mut Frame, model: &Model, palette: Palette, area: Rect) {
    let categories = model.store.categories();
    let position = categories
        .iter()
        .position(|c| c == model.store.category())
        .map(|i| i + 1)
        .unwrap_or(0);

    let line = Line::from(vec![
        Span::styled(" Category: ", Style::default().fg(palette.muted)),
        Span::styled(
            format!("‹ {} ›", strip_control(model.store.category().label())),
            Style::default().fg(palette.accent),
        ),
        Span::styled(
            format!("  ({}/{})", position, categories.len()),
            Style::default().fg(palette.muted),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_grid(f: &mut Frame, model: &mut Model, palette: Palette, area: Rect) {
    let items: Vec<ListItem> = model
        .store
        .view()
        .into_iter()
        .map(|p| ListItem::new(card_lines(p, palette)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::TOP))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut model.list_state);
}

fn render_error(f: &mut Frame, message: &str, palette: Palette, area: Rect) {
    let text = Paragraph::new(format!("Error: {}", strip_control(message)))
        .style(Style::default().fg(palette.error))
        .block(Block::default().borders(Borders::TOP))
        .wrap(Wrap { trim: true });
    f.render_widget(text, area);
}

fn render_footer(f: &mut Frame, model: &Model, palette: Palette, area: Rect) {
    let text = match &model.flash {
        Some(flash) => format!(" {}", flash.text),
        None => match model.focus {
            Focus::Search => format!(" © {} · type to filter · Esc: clear/back · Enter: list", model.year),
            Focus::Grid => format!(
                " © {} · /: search · ←/→: category · s: shuffle · r: reset · t: theme · c: copy link · q: quit",
                model.year
            ),
        },
    };
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(palette.muted)),
        area,
    );
}

/// 表示幅（文字数、u16 に収まらなければ飽和）
fn text_width(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}

fn render_prompt(f: &mut Frame, link: &str, palette: Palette, area: Rect) {
    let width = text_width(link)
        .saturating_add(4)
        .max(text_width(PROMPT_MESSAGE).saturating_add(4))
        .min(area.width);
    let height = 5u16.min(area.height);
    let dialog = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    f.render_widget(Clear, dialog);
    let body = Paragraph::new(vec![
        Line::from(strip_control(link)),
        Line::from(""),
        Line::styled("Esc: close", Style::default().fg(palette.muted)),
    ])
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .title(format!(" {} ", PROMPT_MESSAGE))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent)),
    )
    .style(Style::default().fg(palette.fg).bg(palette.bg));
    f.render_widget(body, dialog);
}

/// 商品カードの行
///
/// タイトル（欠損時は `Untitled product`）とカテゴリ、説明、リンクの順。
pub fn card_lines(product: &Product, palette: Palette) -> Vec<Line<'static>> {
    let title = product
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .unwrap_or(UNTITLED);

    let mut header = vec![Span::styled(
        strip_control(title),
        Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
    )];
    if let Some(category) = product.non_empty_category() {
        header.push(Span::raw("  "));
        header.push(Span::styled(
            format!("[{}]", strip_control(category)),
            Style::default().fg(palette.accent),
        ));
    }

    let link = product
        .affiliate_url
        .as_deref()
        .filter(|l| !l.is_empty())
        .unwrap_or("#");

    let mut lines = vec![Line::from(header)];
    if !product.description().is_empty() {
        lines.push(Line::styled(
            format!("  {}", strip_control(product.description())),
            Style::default().fg(palette.muted),
        ));
    }
    lines.push(Line::styled(
        format!("  ↗ {}", strip_control(link)),
        Style::default().fg(palette.muted),
    ));
    lines.push(Line::from(""));
    lines
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;

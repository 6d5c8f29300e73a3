//! 描画ヘルパー
//!
//! フィルタ結果の HTML カード出力、端末表示用の無害化、
//! カテゴリ選択肢の組み立てを行う。

pub mod html;

use crate::catalog::CategoryFilter;

/// `& < > " '` を実体参照に置き換える
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// 端末表示用に制御文字を空白へ置き換える
pub fn strip_control(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// カテゴリ選択肢（値, 表示ラベル）
pub fn category_options(categories: &[CategoryFilter]) -> Vec<(String, String)> {
    categories
        .iter()
        .map(|c| (c.value().to_string(), c.label().to_string()))
        .collect()
}

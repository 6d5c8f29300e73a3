//! HTML カード出力

use super::escape_html;
use crate::catalog::Product;
use std::fmt::Write;

/// タイトル欠損時の表示
pub const UNTITLED: &str = "Untitled product";

/// 商品カードを並べたグリッド
pub fn render_grid(products: &[&Product]) -> String {
    let mut out = String::new();
    for product in products {
        out.push_str(&render_card(product));
    }
    out
}

/// 商品カード1枚
///
/// テキスト・属性値はすべてエスケープする。
pub fn render_card(product: &Product) -> String {
    let title = product.title.as_deref().filter(|t| !t.is_empty());
    let alt = title.unwrap_or("Product image");
    let link = product
        .affiliate_url
        .as_deref()
        .filter(|l| !l.is_empty())
        .unwrap_or("#");

    let mut out = String::new();
    out.push_str("<article class=\"card\">\n");
    let _ = writeln!(
        out,
        "  <img class=\"thumb\" alt=\"{}\" loading=\"lazy\" src=\"{}\">",
        escape_html(alt),
        escape_html(product.image.as_deref().unwrap_or_default())
    );
    out.push_str("  <div class=\"card-body\">\n");
    out.push_str("    <div class=\"card-top\">\n");
    let _ = writeln!(out, "      <h3>{}</h3>", escape_html(title.unwrap_or(UNTITLED)));
    if let Some(category) = product.non_empty_category() {
        let _ = writeln!(
            out,
            "      <span class=\"kicker\">{}</span>",
            escape_html(category)
        );
    }
    out.push_str("    </div>\n");
    let _ = writeln!(
        out,
        "    <p class=\"desc\">{}</p>",
        escape_html(product.description())
    );
    out.push_str("    <div class=\"card-actions\">\n");
    let _ = writeln!(
        out,
        "      <a class=\"link\" href=\"{}\" target=\"_blank\" rel=\"noreferrer\"><span aria-hidden=\"true\">↗</span> Amazon</a>",
        escape_html(link)
    );
    let _ = writeln!(
        out,
        "      <button class=\"copy\" type=\"button\" data-copy=\"{}\">Copy link</button>",
        escape_html(product.affiliate_url())
    );
    out.push_str("    </div>\n");
    out.push_str("  </div>\n");
    out.push_str("</article>\n");
    out
}

/// 読み込み失敗時のエラー行
pub fn render_error(message: &str) -> String {
    format!("<div class=\"muted\">Error: {}</div>\n", escape_html(message))
}

/// 件数表示
pub fn render_hint(hint: &str) -> String {
    format!("<p class=\"result-hint\">{}</p>\n", escape_html(hint))
}

#[cfg(test)]
#[path = "html_test.rs"]
mod tests;

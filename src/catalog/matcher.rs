//! 単一商品の判定

use super::category::CategoryFilter;
use super::normalize::normalize;
use super::product::Product;

/// 商品が (検索語, カテゴリ) の組を満たすか
///
/// 1. カテゴリが一致しなければ不一致
/// 2. 正規化した検索語が空なら一致
/// 3. タイトル・説明・カテゴリ・ID を空白区切りで連結して正規化し、
///    検索語を部分文字列として含めば一致
pub fn product_matches(product: &Product, query: &str, category: &CategoryFilter) -> bool {
    if !category.accepts(product) {
        return false;
    }

    let query = normalize(Some(query));
    if query.is_empty() {
        return true;
    }

    haystack(product).contains(&query)
}

/// 検索対象テキスト
fn haystack(product: &Product) -> String {
    let joined = [
        product.title(),
        product.description(),
        product.category(),
        product.id(),
    ]
    .join(" ");
    normalize(Some(&joined))
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;

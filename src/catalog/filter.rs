//! フィルタエンジン
//!
//! 全商品に判定を適用し、元の順序を保った部分列を返す。

use super::category::CategoryFilter;
use super::matcher::product_matches;
use super::product::Product;

/// フィルタ結果（カタログ内の位置を元の順序で保持）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterResult {
    pub indices: Vec<usize>,
}

impl FilterResult {
    /// 件数
    pub fn count(&self) -> usize {
        self.indices.len()
    }

    /// カタログから該当商品を取り出す
    pub fn products<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        self.indices.iter().filter_map(|&i| catalog.get(i)).collect()
    }
}

/// 検索語とカテゴリで商品を絞り込む
pub fn filter_products(catalog: &[Product], query: &str, category: &CategoryFilter) -> FilterResult {
    let indices = catalog
        .iter()
        .enumerate()
        .filter(|(_, p)| product_matches(p, query, category))
        .map(|(i, _)| i)
        .collect();

    FilterResult { indices }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;

//! カテゴリ列挙
//!
//! 商品一覧から重複のないカテゴリ一覧を作る。先頭は常に「全カテゴリ」。

use super::product::Product;
use std::cmp::Ordering;
use std::fmt;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// 「制限なし」を表すセンチネル値
pub const ALL_CATEGORIES: &str = "all";

/// カテゴリ選択
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// カテゴリ制限なし
    #[default]
    All,
    /// 指定カテゴリのみ（大文字小文字を区別した完全一致）
    Named(String),
}

impl CategoryFilter {
    /// 選択値（`"all"` またはカテゴリ名そのもの）
    pub fn value(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }

    /// 表示ラベル
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All categories",
            CategoryFilter::Named(name) => name,
        }
    }

    /// 商品のカテゴリがこの選択を満たすか
    pub fn accepts(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => product.category.as_deref() == Some(name.as_str()),
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value.to_string())
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// カテゴリ一覧を作成
///
/// - 先頭は `CategoryFilter::All`
/// - 空・欠損カテゴリは含めない
/// - 重複は1件にまとめ、ロケール風の昇順で並べる
pub fn unique_categories(products: &[Product]) -> Vec<CategoryFilter> {
    let mut names: Vec<&str> = products
        .iter()
        .filter_map(Product::non_empty_category)
        .filter(|c| *c != ALL_CATEGORIES)
        .collect();
    names.sort_by(|a, b| locale_compare(a, b));
    names.dedup();

    std::iter::once(CategoryFilter::All)
        .chain(names.into_iter().map(|n| CategoryFilter::Named(n.to_string())))
        .collect()
}

/// ロケール風の文字列比較
///
/// 1. アクセント記号と大文字小文字を無視した順序
/// 2. 大文字小文字のみ無視した順序（アクセントなしが先）
/// 3. 小文字を先に
/// 4. コードポイント順
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_key(a)
        .cmp(&base_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| case_rank(a).cmp(&case_rank(b)))
        .then_with(|| a.cmp(b))
}

/// NFD 分解して結合文字を除き、小文字化した比較キー
fn base_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// 小文字を先に並べるための順位（文字ごと）
fn case_rank(s: &str) -> Vec<u8> {
    s.chars().map(|c| u8::from(c.is_uppercase())).collect()
}

#[cfg(test)]
#[path = "category_test.rs"]
mod tests;

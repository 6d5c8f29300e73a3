//! カタログ状態
//!
//! 読み込み済みカタログと現在の表示ビューを保持する唯一の可変状態。
//!
//! ## 状態遷移
//!
//! ```text
//!   load()  ──▶ Initial ──set_query()/set_category()/reset()──▶ Filtered
//!                  │                                              ▲ │
//!                  └──────────────── shuffle() ──▶ Shuffled ──────┘ │
//!                                                     ▲             │
//!                                                     └─ shuffle() ─┘
//! ```

use super::category::{unique_categories, CategoryFilter};
use super::filter::{filter_products, FilterResult};
use super::product::Product;
use super::shuffle::shuffle;
use rand::Rng;

/// 読み込み失敗時の見出し
pub const LOAD_FAILURE_HINT: &str = "Could not load products.";

/// ビューの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// 読み込み直後（カタログ全件）
    #[default]
    Initial,
    /// 検索語・カテゴリで再計算済み
    Filtered,
    /// シャッフル済み（次のフィルタ変更で破棄）
    Shuffled,
}

/// カタログ状態
#[derive(Debug)]
pub struct CatalogStore {
    products: Vec<Product>,
    categories: Vec<CategoryFilter>,
    query: String,
    category: CategoryFilter,
    /// 表示中の商品（`products` 内の位置）
    view: FilterResult,
    state: ViewState,
    load_error: Option<String>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    /// 空のストアを作成
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            categories: vec![CategoryFilter::All],
            query: String::new(),
            category: CategoryFilter::All,
            view: FilterResult::default(),
            state: ViewState::Initial,
            load_error: None,
        }
    }

    /// 商品一覧を読み込んで作成
    pub fn with_products(products: Vec<Product>) -> Self {
        let mut store = Self::new();
        store.load(products);
        store
    }

    /// カタログを読み込む（カテゴリ一覧も再計算）
    pub fn load(&mut self, products: Vec<Product>) {
        self.categories = unique_categories(&products);
        self.products = products;
        self.load_error = None;
        self.refilter();
        self.state = ViewState::Initial;
        tracing::info!(
            products = self.products.len(),
            categories = self.categories.len() - 1,
            "catalog loaded"
        );
    }

    /// 読み込み失敗を記録（カタログは空のまま）
    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(error = %message, "catalog load failed");
        self.products.clear();
        self.categories = vec![CategoryFilter::All];
        self.view = FilterResult::default();
        self.state = ViewState::Initial;
        self.load_error = Some(message);
    }

    /// 検索語を変更して再計算
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.apply_filters();
    }

    /// カテゴリを変更して再計算
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.apply_filters();
    }

    /// カテゴリ一覧内で選択を前後に移動（末尾・先頭で循環）
    pub fn cycle_category(&mut self, forward: bool) {
        let len = self.categories.len();
        if len == 0 {
            return;
        }
        let current = self
            .categories
            .iter()
            .position(|c| *c == self.category)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.set_category(self.categories[next].clone());
    }

    /// 検索語を空、カテゴリを All に戻す
    pub fn reset(&mut self) {
        self.query.clear();
        self.category = CategoryFilter::All;
        self.apply_filters();
    }

    /// 現在のビュー（空ならカタログ全件）をシャッフル
    pub fn shuffle_with<R: Rng>(&mut self, rng: &mut R) {
        let source: Vec<usize> = if self.view.count() == 0 {
            (0..self.products.len()).collect()
        } else {
            self.view.indices.clone()
        };
        self.view = FilterResult {
            indices: shuffle(&source, rng),
        };
        self.state = ViewState::Shuffled;
        tracing::debug!(count = self.view.count(), "view shuffled");
    }

    /// スレッドローカル乱数でシャッフル
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    fn apply_filters(&mut self) {
        self.refilter();
        self.state = ViewState::Filtered;
        tracing::debug!(
            query = %self.query,
            category = %self.category,
            count = self.view.count(),
            "filters applied"
        );
    }

    fn refilter(&mut self) {
        self.view = filter_products(&self.products, &self.query, &self.category);
    }

    /// 表示中の商品
    pub fn view(&self) -> Vec<&Product> {
        self.view.products(&self.products)
    }

    pub fn count(&self) -> usize {
        self.view.count()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn is_shuffled(&self) -> bool {
        self.state() == ViewState::Shuffled
    }

    pub fn categories(&self) -> &[CategoryFilter] {
        &self.categories
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// ID でカタログ内の商品を検索
    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_deref() == Some(id))
    }

    /// 件数表示（読み込み失敗時は失敗メッセージ）
    pub fn result_hint(&self) -> String {
        if self.load_error.is_some() {
            return LOAD_FAILURE_HINT.to_string();
        }
        result_hint(self.count(), self.is_shuffled())
    }
}

/// `"<n> result<s> shown"`、シャッフル後は末尾に `" (shuffled)"`
pub fn result_hint(count: usize, shuffled: bool) -> String {
    let plural = if count == 1 { "" } else { "s" };
    let suffix = if shuffled { " (shuffled)" } else { "" };
    format!("{count} result{plural} shown{suffix}")
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

//! カタログコア
//!
//! 商品一覧の検索・カテゴリ絞り込み・シャッフルを行う純粋関数群と、
//! それらを束ねる唯一の可変状態 `CatalogStore` を提供する。
//!
//! ## モジュール構成
//!
//! - `product`: 商品レコード
//! - `normalize`: 比較用テキスト正規化
//! - `category`: カテゴリ列挙
//! - `matcher`: 単一商品の判定
//! - `filter`: 全件への適用
//! - `shuffle`: 非破壊シャッフル
//! - `store`: カタログ状態

mod category;
mod filter;
mod matcher;
mod normalize;
mod product;
mod shuffle;
mod store;

pub use category::{unique_categories, CategoryFilter};
pub use product::Product;
pub use store::{CatalogStore, LOAD_FAILURE_HINT};

#[cfg(test)]
#[path = "catalog_proptests.rs"]
mod proptests;

//! 商品レコード

use serde::{Deserialize, Deserializer, Serialize};

/// 商品（外部データソースから読み込まれ、コアからは読み取り専用）
///
/// すべてのフィールドは省略可能で、欠損は空文字列として扱う。
/// 数値・真偽値はテキストとして受け入れる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// 検索対象テキストとしてのみ使う識別子
    #[serde(
        default,
        deserialize_with = "string_like",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_like",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_like",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_like",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_like",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
    #[serde(
        default,
        rename = "affiliateUrl",
        deserialize_with = "string_like",
        skip_serializing_if = "Option::is_none"
    )]
    pub affiliate_url: Option<String>,
}

impl Product {
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or_default()
    }

    pub fn affiliate_url(&self) -> &str {
        self.affiliate_url.as_deref().unwrap_or_default()
    }

    /// 空でないカテゴリ（カテゴリ列挙用）
    pub fn non_empty_category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// JSON の文字列・数値・真偽値をテキストとして受け入れる
#[derive(Deserialize)]
#[serde(untagged)]
enum StringLike {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
}

fn string_like<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<StringLike> = Option::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        StringLike::Text(s) => s,
        StringLike::Signed(n) => n.to_string(),
        StringLike::Unsigned(n) => n.to_string(),
        StringLike::Float(n) => n.to_string(),
        StringLike::Bool(b) => b.to_string(),
    }))
}

#[cfg(test)]
#[path = "product_test.rs"]
mod tests;

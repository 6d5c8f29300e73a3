//! 共通HTTPヘルパー

use crate::error::{Result, ShelfError};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;

/// キャッシュを使わずに取得（スピナー付き）
///
/// 成功以外のステータスは `LoadStatus` として返す。リトライはしない。
pub async fn fetch_fresh(client: &Client, url: &str) -> Result<Vec<u8>> {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} Loading {msg}...") {
        pb.set_style(style);
    }
    pb.set_message(resource_name(url));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = fetch(client, url).await;
    pb.finish_and_clear();
    result
}

async fn fetch(client: &Client, url: &str) -> Result<Vec<u8>> {
    let response = client
        .get(url)
        .header(CACHE_CONTROL, "no-store")
        .header(PRAGMA, "no-cache")
        .send()
        .await?;

    let status = response.status();
    tracing::debug!(url, status = status.as_u16(), "catalog response");

    if !status.is_success() {
        return Err(ShelfError::LoadStatus {
            name: resource_name(url),
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

/// URL・パスの末尾要素（クエリ・フラグメントは除く）
pub fn resource_name(location: &str) -> String {
    let without_suffix = location
        .split(['?', '#'])
        .next()
        .unwrap_or(location)
        .trim_end_matches('/');
    without_suffix
        .rsplit(['/', '\\'])
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(location)
        .to_string()
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

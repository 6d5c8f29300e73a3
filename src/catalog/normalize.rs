//! 比較用テキスト正規化

/// 小文字化して前後の空白を除去する（欠損は空文字列）
pub fn normalize(value: Option<&str>) -> String {
    value.unwrap_or_default().to_lowercase().trim().to_string()
}

use thiserror::Error;

/// shelf 統一エラー型
#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to load {name} ({status})")]
    LoadStatus { name: String, status: u16 },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Theme error: {0}")]
    Theme(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Product not found: {0}")]
    ProductNotFound(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;

impl ShelfError {
    /// カタログ読み込みの失敗かどうか
    ///
    /// 読み込み失敗は境界で捕捉され、リトライされない。
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            ShelfError::Network(_)
                | ShelfError::LoadStatus { .. }
                | ShelfError::InvalidCatalog(_)
                | ShelfError::Json(_)
                | ShelfError::Io(_)
        )
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;

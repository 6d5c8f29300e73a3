use std::path::PathBuf;

/// データディレクトリを上書きする環境変数
pub const SHELF_HOME: &str = "SHELF_HOME";
/// データソースを上書きする環境変数
pub const SHELF_SOURCE: &str = "SHELF_SOURCE";
/// ログフィルタ（`tracing_subscriber::EnvFilter` 形式）
pub const SHELF_LOG: &str = "SHELF_LOG";

/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }
}

/// データディレクトリ（`$SHELF_HOME` または `~/.shelf`）
pub fn data_dir() -> Result<PathBuf, String> {
    if let Some(dir) = EnvVar::get(SHELF_HOME) {
        return Ok(PathBuf::from(dir));
    }
    let home = EnvVar::get("HOME").ok_or("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".shelf"))
}

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;

//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Duplicate abnormality id: {0}")]
    DuplicateId(String),

    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    /// カタログ・評価の初回読み込み失敗（グリッドの代わりにエラー表示）
    #[error("Error loading data: {0}")]
    FetchFailed(String),

    /// 評価の再取得失敗（古い評価をそのまま表示）
    #[error("Rating refresh failed: {0}")]
    RefreshFailed(String),

    /// 評価送信失敗（パネルは開いたまま）
    #[error("Could not submit your rating: {0}")]
    SubmitFailed(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = Error::Json(json_error);
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_display_invalid_rating() {
        let error = Error::InvalidRating(7);
        assert_eq!(format!("{}", error), "Rating must be between 1 and 5, got 7");
    }

    #[test]
    fn test_error_display_fetch_failed() {
        let error = Error::FetchFailed("HTTP 500".to_string());
        assert_eq!(format!("{}", error), "Error loading data: HTTP 500");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::DuplicateId("O-01-04".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("DuplicateId"));
        assert!(debug.contains("O-01-04"));
    }
}

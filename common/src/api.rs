//! 外部エンドポイントのパス

/// カタログ一覧（GET）
pub const ABNORMALITIES_PATH: &str = "/api/abnormalities";

/// 評価集計（GET）
pub const RATINGS_PATH: &str = "/api/ratings";

/// 評価送信（POST）
pub const RATE_PATH: &str = "/api/rate";

/// ベースURLとパスを結合（ベースが空なら同一オリジンの相対パス）
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

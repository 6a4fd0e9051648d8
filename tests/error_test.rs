//! エラー表示テスト

use abno_catalog::error::CatalogError;
use abno_catalog_common::{Error, RatingValue};

/// CatalogErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        CatalogError::Config("テスト設定エラー".to_string()),
        CatalogError::NotFound("O-00-00".to_string()),
        CatalogError::Notice("Could not submit your rating. HTTP 500".to_string()),
        CatalogError::Cancelled,
    ];

    for err in errors {
        let msg = err.to_string();
        assert!(!msg.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 共通エラーはそのまま表示される
#[test]
fn test_common_error_transparent() {
    let err: CatalogError = Error::FetchFailed("HTTP 500".to_string()).into();
    assert_eq!(err.to_string(), "Error loading data: HTTP 500");
}

/// 範囲外の評価値は送信前に弾く
#[test]
fn test_invalid_rating_rejected() {
    let err: CatalogError = RatingValue::new(6).unwrap_err().into();
    assert!(matches!(err, CatalogError::Common(Error::InvalidRating(6))));
}

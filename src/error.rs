use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("アブノーマリティが見つかりません: {0}")]
    NotFound(String),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] abno_catalog_common::Error),

    /// ユーザー向けの通知（評価送信の失敗など）
    #[error("{0}")]
    Notice(String),

    #[error("キャンセルしました")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, CatalogError>;

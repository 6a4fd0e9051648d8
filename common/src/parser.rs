//! APIレスポンスパーサー
//!
//! `/api/abnormalities` と `/api/ratings` のレスポンスを検証付きでパースする。
//! 型が合わない・IDが重複しているレスポンスは丸ごと不正として扱う。

use crate::error::{Error, Result};
use crate::types::{Entity, Ratings};
use std::collections::HashSet;

/// カタログ（Entity配列）をパース
///
/// # Arguments
/// * `body` - `/api/abnormalities` のレスポンス本文
///
/// # Returns
/// * `Ok(Vec<Entity>)` - パース成功（サーバーの並び順のまま）
/// * `Err` - JSON不正またはID重複
pub fn parse_catalog(body: &str) -> Result<Vec<Entity>> {
    let entities: Vec<Entity> = serde_json::from_str(body.trim())
        .map_err(|e| Error::Parse(format!("catalog: {}", e)))?;
    validate_catalog(entities)
}

/// IDの一意性を検証
pub fn validate_catalog(entities: Vec<Entity>) -> Result<Vec<Entity>> {
    let mut seen = HashSet::with_capacity(entities.len());
    for entity in &entities {
        if entity.id.is_empty() {
            return Err(Error::Parse("catalog: empty abnormality id".into()));
        }
        if !seen.insert(entity.id.as_str()) {
            return Err(Error::DuplicateId(entity.id.clone()));
        }
    }
    Ok(entities)
}

/// 評価集計（ID → {average, count}）をパース
pub fn parse_ratings(body: &str) -> Result<Ratings> {
    let ratings: Ratings = serde_json::from_str(body.trim())
        .map_err(|e| Error::Parse(format!("ratings: {}", e)))?;
    Ok(ratings)
}

//! 評価の送信データ
//!
//! 1〜5以外の値は送信前に弾く。

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

/// 評価値（1〜5）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub struct RatingValue(u8);

impl RatingValue {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// ウィジェットの星（低い順）
    pub const ALL: [RatingValue; 5] = [
        RatingValue(1),
        RatingValue(2),
        RatingValue(3),
        RatingValue(4),
        RatingValue(5),
    ];

    pub fn new(value: u8) -> Result<Self> {
        Self::try_from(value)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for RatingValue {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(RatingValue(value))
        } else {
            Err(Error::InvalidRating(value))
        }
    }
}

impl From<RatingValue> for u8 {
    fn from(value: RatingValue) -> Self {
        value.0
    }
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `POST /api/rate` の本文
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateRequest {
    pub abnormality_id: String,
    pub rating: RatingValue,
    pub user_id: String,
}

impl RateRequest {
    pub fn new(abnormality_id: impl Into<String>, rating: RatingValue, user_id: impl Into<String>) -> Self {
        Self {
            abnormality_id: abnormality_id.into(),
            rating,
            user_id: user_id.into(),
        }
    }
}

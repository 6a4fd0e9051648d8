//! グリッドのカード表示内容
//!
//! 表示リストからカード1枚分の表示内容を組み立てる。
//! ブラウザとCLIの両方がこの結果をそのまま描画する。

use crate::favorites::Favorites;
use crate::types::{Entity, RatingAggregate, Ratings, WorkType, NOT_AVAILABLE, PLACEHOLDER_IMAGE};

/// 該当なしの表示
pub const NO_RESULTS_TEXT: &str = "No abnormalities found.";

/// カード裏面に出す作業適性のレベル（V = index 4）
pub const SUMMARY_LEVEL_INDEX: usize = 4;

/// 適性値（0.0〜1.0）を整数パーセントに整形
///
/// # Examples
/// ```
/// use abno_catalog_common::format_percent;
///
/// assert_eq!(format_percent(0.504), "50%");
/// ```
pub fn format_percent(value: f64) -> String {
    let percent = (value * 100.0).round() as i64;
    format!("{}%", percent)
}

/// 評価の表示（未評価は N/A と0件）
pub fn format_rating(rating: Option<&RatingAggregate>) -> String {
    match rating {
        Some(r) => format!("★ {} ({})", r.average, r.count),
        None => format!("★ {} (0)", NOT_AVAILABLE),
    }
}

/// 作業適性の要約1行
#[derive(Debug, Clone, PartialEq)]
pub struct WorkSummary {
    pub work: WorkType,
    pub percent: String,
}

/// カード1枚分の表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: String,
    pub name: String,
    pub image: String,
    pub fallback_image: &'static str,
    pub rating: String,
    pub is_favorite: bool,
    pub risk_class: Option<String>,
    pub work_summary: Vec<WorkSummary>,
}

impl CardView {
    pub fn build(entity: &Entity, ratings: &Ratings, favorites: &Favorites) -> Self {
        let work_summary = WorkType::ALL
            .iter()
            .map(|&work| WorkSummary {
                work,
                percent: format_percent(entity.work_preferences.level(work, SUMMARY_LEVEL_INDEX)),
            })
            .collect();

        Self {
            id: entity.id.clone(),
            name: entity.display_name().to_string(),
            image: entity.preview_image().to_string(),
            fallback_image: PLACEHOLDER_IMAGE,
            rating: format_rating(ratings.get(&entity.id)),
            is_favorite: favorites.contains(&entity.id),
            risk_class: entity.risk_level.as_ref().map(|risk| risk.css_class()),
            work_summary,
        }
    }

    /// カードのCSSクラス
    pub fn css_class(&self) -> String {
        match &self.risk_class {
            Some(risk) => format!("abnormality-card {}", risk),
            None => "abnormality-card".to_string(),
        }
    }
}

/// グリッド全体の状態
#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    /// 読み込み中
    Loading,
    /// 読み込み失敗（グリッドの代わりにメッセージを出す）
    Error(String),
    /// 該当なし
    Empty,
    Cards(Vec<CardView>),
}

impl GridView {
    pub fn from_list(list: &[&Entity], ratings: &Ratings, favorites: &Favorites) -> Self {
        if list.is_empty() {
            return GridView::Empty;
        }
        GridView::Cards(
            list.iter()
                .map(|entity| CardView::build(entity, ratings, favorites))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RiskLevel, WorkPreferences};

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(1.0), "100%");
        assert_eq!(format_percent(0.504), "50%");
        assert_eq!(format_percent(0.456), "46%");
    }

    #[test]
    fn test_format_rating() {
        let rating = RatingAggregate { average: 3.5, count: 2 };
        assert_eq!(format_rating(Some(&rating)), "★ 3.5 (2)");
        assert_eq!(format_rating(None), "★ N/A (0)");
    }

    #[test]
    fn test_card_build_defaults() {
        let entity = Entity {
            id: "X-01".to_string(),
            ..Default::default()
        };
        let card = CardView::build(&entity, &Ratings::new(), &Favorites::new());

        assert_eq!(card.name, "Unnamed");
        assert_eq!(card.image, PLACEHOLDER_IMAGE);
        assert_eq!(card.rating, "★ N/A (0)");
        assert!(!card.is_favorite);
        assert_eq!(card.risk_class, None);
        assert_eq!(card.css_class(), "abnormality-card");
        assert!(card.work_summary.iter().all(|w| w.percent == "0%"));
    }

    #[test]
    fn test_card_build_full() {
        let entity = Entity {
            id: "O-03-03".to_string(),
            name: Some("Queen of Hatred".to_string()),
            risk_level: Some(RiskLevel::Waw),
            preview_image: Some("static/images/o-03-03.png".to_string()),
            work_preferences: WorkPreferences {
                instinct: Some(vec![0.5, 0.5, 0.4, 0.3, 0.3]),
                attachment: Some(vec![0.6, 0.6, 0.6, 0.6, 0.556]),
                ..Default::default()
            },
            ..Default::default()
        };
        let mut ratings = Ratings::new();
        ratings.insert("O-03-03".to_string(), RatingAggregate { average: 4.0, count: 3 });
        let favorites = Favorites::from_ids(["O-03-03"]);

        let card = CardView::build(&entity, &ratings, &favorites);
        assert_eq!(card.rating, "★ 4 (3)");
        assert!(card.is_favorite);
        assert_eq!(card.css_class(), "abnormality-card risk-waw");

        let percents: Vec<&str> = card.work_summary.iter().map(|w| w.percent.as_str()).collect();
        assert_eq!(percents, vec!["30%", "0%", "56%", "0%"]);
    }

    #[test]
    fn test_grid_empty_list() {
        let grid = GridView::from_list(&[], &Ratings::new(), &Favorites::new());
        assert_eq!(grid, GridView::Empty);
    }
}

//! 表示リストの算出
//!
//! カタログ・評価・お気に入り・検索条件から、グリッドに並べる順序付きリストを作る。
//! 1. ソート（安定ソート、同値は元の順序のまま）
//! 2. 検索（名前またはIDの部分一致、大文字小文字を区別しない）
//! 3. フィルタ（all / favorites）

use crate::favorites::Favorites;
use crate::types::{Entity, Ratings};
use std::cmp::Ordering;
use std::fmt;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// ソート順
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    RiskDesc,
    RiskAsc,
    RatingDesc,
    RatingAsc,
    NameAsc,
    NameDesc,
}

impl SortKey {
    /// セレクタの表示順
    pub const ALL: [SortKey; 6] = [
        SortKey::RiskDesc,
        SortKey::RiskAsc,
        SortKey::RatingDesc,
        SortKey::RatingAsc,
        SortKey::NameAsc,
        SortKey::NameDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::RiskDesc => "risk-desc",
            SortKey::RiskAsc => "risk-asc",
            SortKey::RatingDesc => "rating-desc",
            SortKey::RatingAsc => "rating-asc",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::RiskDesc => "Risk (High to Low)",
            SortKey::RiskAsc => "Risk (Low to High)",
            SortKey::RatingDesc => "Rating (High to Low)",
            SortKey::RatingAsc => "Rating (Low to High)",
            SortKey::NameAsc => "Name (A-Z)",
            SortKey::NameDesc => "Name (Z-A)",
        }
    }

    fn compare(&self, a: &Entity, b: &Entity, ratings: &Ratings) -> Ordering {
        match self {
            SortKey::RiskDesc => b.risk_rank().cmp(&a.risk_rank()),
            SortKey::RiskAsc => a.risk_rank().cmp(&b.risk_rank()),
            SortKey::RatingDesc => average_of(ratings, b).total_cmp(&average_of(ratings, a)),
            SortKey::RatingAsc => average_of(ratings, a).total_cmp(&average_of(ratings, b)),
            SortKey::NameAsc => compare_names(name_of(a), name_of(b)),
            SortKey::NameDesc => compare_names(name_of(b), name_of(a)),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| {
                format!(
                    "Unknown sort: {}. Use risk-desc, risk-asc, rating-desc, rating-asc, name-asc, or name-desc",
                    s
                )
            })
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// カテゴリフィルタ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Favorites,
}

impl Filter {
    pub const ALL: [Filter; 2] = [Filter::All, Filter::Favorites];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Favorites => "favorites",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Favorites => "Favorites",
        }
    }
}

impl std::str::FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "favorites" | "fav" => Ok(Filter::Favorites),
            _ => Err(format!("Unknown filter: {}. Use all or favorites", s)),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 画面上の一時的な表示条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub search: String,
    pub filter: Filter,
    pub sort: SortKey,
}

/// 表示リストを算出
///
/// 戻り値は入力の部分集合で、重複も新規要素も含まない
pub fn compute<'a>(
    entities: &'a [Entity],
    ratings: &Ratings,
    favorites: &Favorites,
    view: &ViewState,
) -> Vec<&'a Entity> {
    let mut sorted: Vec<&Entity> = entities.iter().collect();
    // sort_by は安定ソート
    sorted.sort_by(|a, b| view.sort.compare(a, b, ratings));

    let query = view.search.to_lowercase();
    sorted
        .into_iter()
        .filter(|entity| matches_search(entity, &query))
        .filter(|entity| match view.filter {
            Filter::All => true,
            Filter::Favorites => favorites.contains(&entity.id),
        })
        .collect()
}

/// 検索語（小文字化済み）が名前またはIDに含まれるか
pub fn matches_search(entity: &Entity, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    name_of(entity).to_lowercase().contains(query) || entity.id.to_lowercase().contains(query)
}

/// 名前の比較
///
/// 1. アクセント記号と大文字小文字を無視した基本文字で比較
/// 2. 同じならアクセント付きを後ろに（小文字化して比較）
/// 3. それでも同じなら元の文字列で比較
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| folded(a).cmp(&folded(b)))
        .then_with(|| a.cmp(b))
}

fn folded(name: &str) -> String {
    name.nfc().collect::<String>().to_lowercase()
}

/// 分解してから結合文字を落とした小文字列（"Éclair" → "eclair"）
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

fn name_of(entity: &Entity) -> &str {
    entity.name.as_deref().unwrap_or("")
}

fn average_of(ratings: &Ratings, entity: &Entity) -> f64 {
    ratings.get(&entity.id).map_or(0.0, |r| r.average)
}

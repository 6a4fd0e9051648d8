//! アプリケーション状態
//!
//! 画面の状態を1つの構造体にまとめ、操作（Action）を `apply` で反映する。
//! 通信や保存などの副作用は `Effect` として返し、呼び出し側（ブラウザ/CLI）が実行する。
//! 描画は `grid` / `detail_panel` による状態の射影のみ。

use crate::card::GridView;
use crate::detail::{DetailPanel, DetailTab, TabState};
use crate::favorites::Favorites;
use crate::rating::{RateRequest, RatingValue};
use crate::types::{Entity, Ratings};
use crate::view_model::{compute, Filter, SortKey, ViewState};

/// カタログの読み込み状態
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// 開いている詳細パネル
#[derive(Debug, Clone, PartialEq)]
pub struct OpenDetail {
    pub id: String,
    pub tabs: TabState,
}

/// ユーザー操作・通信結果
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    CatalogLoaded { entities: Vec<Entity>, ratings: Ratings },
    CatalogFailed(String),
    /// 評価の再取得を要求
    RefreshRatings,
    RatingsRefreshed { seq: u64, ratings: Ratings },
    RatingsRefreshFailed(String),
    SetSearch(String),
    SetSort(SortKey),
    SetFilter(Filter),
    ToggleFavorite(String),
    /// 確認済みの全削除
    ClearFavorites,
    OpenDetail(String),
    CloseDetail,
    SelectTab(DetailTab),
    Rate { id: String, rating: RatingValue },
    RatingSubmitted,
    RatingSubmitFailed(String),
    DismissNotice,
}

/// 呼び出し側が実行する副作用
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    PersistFavorites,
    RefreshRatings { seq: u64 },
    SubmitRating(RateRequest),
    Notify(String),
}

/// アプリケーション状態
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub user_id: String,
    pub entities: Vec<Entity>,
    pub ratings: Ratings,
    pub favorites: Favorites,
    pub view: ViewState,
    pub status: CatalogStatus,
    pub detail: Option<OpenDetail>,
    pub notice: Option<String>,
    /// 発行済みの評価再取得番号
    ratings_issued: u64,
    /// 反映済みの評価再取得番号
    ratings_applied: u64,
}

impl AppState {
    pub fn new(user_id: impl Into<String>, favorites: Favorites) -> Self {
        Self {
            user_id: user_id.into(),
            favorites,
            ..Default::default()
        }
    }

    /// 操作を反映し、必要な副作用を返す
    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::CatalogLoaded { entities, ratings } => {
                tracing::debug!("catalog loaded: {} abnormalities, {} ratings", entities.len(), ratings.len());
                self.entities = entities;
                self.ratings = ratings;
                self.status = CatalogStatus::Ready;
                vec![]
            }
            Action::CatalogFailed(message) => {
                tracing::error!("catalog load failed: {}", message);
                // 既存データは残し、表示だけエラーにする
                self.status = CatalogStatus::Failed(message);
                vec![]
            }
            Action::RefreshRatings => vec![self.issue_refresh()],
            Action::RatingsRefreshed { seq, ratings } => {
                if seq <= self.ratings_applied {
                    tracing::debug!("discarding stale ratings response #{} (applied #{})", seq, self.ratings_applied);
                } else {
                    self.ratings_applied = seq;
                    self.ratings = ratings;
                }
                vec![]
            }
            Action::RatingsRefreshFailed(message) => {
                tracing::warn!("ratings refresh failed, keeping stale ratings: {}", message);
                vec![]
            }
            Action::SetSearch(search) => {
                self.view.search = search;
                vec![]
            }
            Action::SetSort(sort) => {
                self.view.sort = sort;
                vec![]
            }
            Action::SetFilter(filter) => {
                self.view.filter = filter;
                vec![]
            }
            Action::ToggleFavorite(id) => {
                self.favorites.toggle(&id);
                vec![Effect::PersistFavorites]
            }
            Action::ClearFavorites => {
                self.favorites.clear();
                vec![Effect::PersistFavorites]
            }
            Action::OpenDetail(id) => {
                match self.entity(&id) {
                    Some(entity) => {
                        let tabs = TabState::new(entity.breach_info.is_some());
                        self.detail = Some(OpenDetail { id, tabs });
                        self.notice = None;
                    }
                    None => tracing::warn!("no abnormality with id {}", id),
                }
                vec![]
            }
            Action::CloseDetail => {
                self.detail = None;
                self.notice = None;
                vec![]
            }
            Action::SelectTab(tab) => {
                if let Some(detail) = self.detail.as_mut() {
                    detail.tabs.select(tab);
                }
                vec![]
            }
            Action::Rate { id, rating } => {
                vec![Effect::SubmitRating(RateRequest::new(id, rating, self.user_id.clone()))]
            }
            Action::RatingSubmitted => {
                self.detail = None;
                self.notice = None;
                vec![self.issue_refresh()]
            }
            Action::RatingSubmitFailed(message) => {
                tracing::error!("rating submission failed: {}", message);
                let notice = format!("Could not submit your rating. {}", message);
                self.notice = Some(notice.clone());
                vec![Effect::Notify(notice)]
            }
            Action::DismissNotice => {
                self.notice = None;
                vec![]
            }
        }
    }

    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id == id)
    }

    /// 表示リスト
    pub fn display_list(&self) -> Vec<&Entity> {
        compute(&self.entities, &self.ratings, &self.favorites, &self.view)
    }

    /// グリッドの描画内容
    pub fn grid(&self) -> GridView {
        match &self.status {
            CatalogStatus::Loading => GridView::Loading,
            CatalogStatus::Failed(message) => GridView::Error(message.clone()),
            CatalogStatus::Ready => {
                GridView::from_list(&self.display_list(), &self.ratings, &self.favorites)
            }
        }
    }

    /// 開いている詳細パネルの描画内容
    pub fn detail_panel(&self) -> Option<(DetailPanel, TabState)> {
        let detail = self.detail.as_ref()?;
        let entity = self.entity(&detail.id)?;
        Some((DetailPanel::build(entity), detail.tabs))
    }

    fn issue_refresh(&mut self) -> Effect {
        self.ratings_issued += 1;
        Effect::RefreshRatings {
            seq: self.ratings_issued,
        }
    }
}

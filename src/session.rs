//! CLIセッション
//!
//! AppStateに操作を流し込み、返ってきた副作用（保存・再取得・送信・通知）を実行する。

use crate::client::CatalogClient;
use abno_catalog_common::{
    ensure_user_id, load_favorites, save_favorites, Action, AppState, Effect, Error, KeyValueStore,
    Result,
};
use std::collections::VecDeque;

pub struct Session<S: KeyValueStore> {
    pub state: AppState,
    client: CatalogClient,
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(client: CatalogClient, store: S) -> Self {
        let user_id = ensure_user_id(&store);
        let favorites = load_favorites(&store);
        Self {
            state: AppState::new(user_id, favorites),
            client,
            store,
        }
    }

    /// カタログと評価の初回読み込み
    ///
    /// 失敗時は状態を FetchFailed 表示にしてエラーを返す
    pub async fn load(&mut self) -> Result<()> {
        match self.client.load().await {
            Ok((entities, ratings)) => {
                self.state.apply(Action::CatalogLoaded { entities, ratings });
                Ok(())
            }
            Err(e) => {
                let detail = match &e {
                    Error::FetchFailed(detail) => detail.clone(),
                    other => other.to_string(),
                };
                self.state.apply(Action::CatalogFailed(detail));
                Err(e)
            }
        }
    }

    /// 操作を反映し、副作用を全て実行する。ユーザー向けの通知を返す
    pub async fn dispatch(&mut self, action: Action) -> Vec<String> {
        let mut queue: VecDeque<Effect> = self.state.apply(action).into();
        let mut notices = Vec::new();

        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::PersistFavorites => save_favorites(&self.store, &self.state.favorites),
                Effect::RefreshRatings { seq } => {
                    let next = match self.client.refresh_ratings().await {
                        Ok(ratings) => Action::RatingsRefreshed { seq, ratings },
                        Err(e) => Action::RatingsRefreshFailed(e.to_string()),
                    };
                    queue.extend(self.state.apply(next));
                }
                Effect::SubmitRating(request) => {
                    let next = match self.client.submit(&request).await {
                        Ok(()) => Action::RatingSubmitted,
                        Err(Error::SubmitFailed(detail)) => Action::RatingSubmitFailed(detail),
                        Err(e) => Action::RatingSubmitFailed(e.to_string()),
                    };
                    queue.extend(self.state.apply(next));
                }
                Effect::Notify(message) => notices.push(message),
            }
        }

        notices
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

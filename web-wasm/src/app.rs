//! メインアプリケーションコンポーネント
//!
//! 状態はAppStateひとつに集約し、操作はDispatcher経由で流し込む。
//! apply()が返す副作用（保存・再取得・送信・通知）はここで実行する。

use crate::api;
use crate::components::{
    abno_grid::AbnoGrid, controls::Controls, detail_panel::DetailPanelView, header::Header,
};
use crate::storage::BrowserStore;
use abno_catalog_common::{
    ensure_user_id, load_favorites, save_favorites, Action, AppState, Effect, Error,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 操作の受け口（コンポーネント間でコピーして渡す）
#[derive(Clone, Copy)]
pub struct Dispatcher {
    state: RwSignal<AppState>,
}

impl Dispatcher {
    pub fn state(&self) -> RwSignal<AppState> {
        self.state
    }

    pub fn dispatch(self, action: Action) {
        let effects = self.state.try_update(|s| s.apply(action)).unwrap_or_default();
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(self, effect: Effect) {
        match effect {
            Effect::PersistFavorites => {
                self.state
                    .with_untracked(|s| save_favorites(&BrowserStore, &s.favorites));
            }
            Effect::RefreshRatings { seq } => spawn_local(async move {
                let next = match api::refresh_ratings().await {
                    Ok(ratings) => Action::RatingsRefreshed { seq, ratings },
                    Err(e) => Action::RatingsRefreshFailed(e.to_string()),
                };
                self.dispatch(next);
            }),
            Effect::SubmitRating(request) => spawn_local(async move {
                let next = match api::submit_rating(&request).await {
                    Ok(()) => Action::RatingSubmitted,
                    Err(Error::SubmitFailed(detail)) => Action::RatingSubmitFailed(detail),
                    Err(e) => Action::RatingSubmitFailed(e.to_string()),
                };
                self.dispatch(next);
            }),
            Effect::Notify(message) => gloo::dialogs::alert(&message),
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let user_id = ensure_user_id(&BrowserStore);
    let favorites = load_favorites(&BrowserStore);
    let dispatcher = Dispatcher {
        state: RwSignal::new(AppState::new(user_id, favorites)),
    };

    // 初回読み込み
    spawn_local(async move {
        let next = match api::load_catalog().await {
            Ok((entities, ratings)) => Action::CatalogLoaded { entities, ratings },
            Err(Error::FetchFailed(detail)) => Action::CatalogFailed(detail),
            Err(e) => Action::CatalogFailed(e.to_string()),
        };
        dispatcher.dispatch(next);
    });

    view! {
        <div class="container">
            <Header />
            <Controls dispatcher=dispatcher />
            <AbnoGrid dispatcher=dispatcher />
            <DetailPanelView dispatcher=dispatcher />
        </div>
    }
}

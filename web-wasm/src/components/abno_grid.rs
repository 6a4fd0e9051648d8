//! アブノーマリティ一覧グリッド

use crate::app::Dispatcher;
use abno_catalog_common::{Action, CardView, GridView, NO_RESULTS_TEXT};
use leptos::prelude::*;

#[component]
pub fn AbnoGrid(dispatcher: Dispatcher) -> impl IntoView {
    let state = dispatcher.state();
    // 詳細パネルの開閉ではグリッドを描き直さない
    let grid = Memo::new(move |_| state.with(|s| s.grid()));

    view! {
        <div id="abnormality-grid" class="abnormality-grid">
            {move || match grid.get() {
                GridView::Loading => view! { <p class="text-muted">"Loading..."</p> }.into_any(),
                GridView::Error(message) => {
                    view! { <p class="error">{format!("Error loading data: {}", message)}</p> }
                        .into_any()
                }
                GridView::Empty => view! { <p>{NO_RESULTS_TEXT}</p> }.into_any(),
                GridView::Cards(cards) => {
                    cards
                        .into_iter()
                        .map(|card| view! { <AbnoCard card=card dispatcher=dispatcher /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn AbnoCard(card: CardView, dispatcher: Dispatcher) -> impl IntoView {
    let (image_failed, set_image_failed) = signal(false);

    let class = card.css_class();
    let star_class = if card.is_favorite {
        "favorite-star is-favorite"
    } else {
        "favorite-star"
    };
    let image = card.image.clone();
    let fallback = card.fallback_image;
    let open_id = card.id.clone();
    let favorite_id = card.id.clone();

    let summary = card
        .work_summary
        .iter()
        .map(|w| view! { <p>{format!("{}: {}", w.work.label(), w.percent)}</p> })
        .collect_view();

    view! {
        <div
            class=class
            data-id=card.id.clone()
            on:click=move |_| dispatcher.dispatch(Action::OpenDetail(open_id.clone()))
        >
            <img
                src=move || if image_failed.get() { fallback.to_string() } else { image.clone() }
                alt=card.name.clone()
                on:error=move |_| set_image_failed.set(true)
            />
            <p class="card-name">{card.name.clone()}</p>
            <div class="card-rating">{card.rating.clone()}</div>
            <div
                class=star_class
                on:click=move |ev: web_sys::MouseEvent| {
                    // カード自体のクリック（詳細表示）は発火させない
                    ev.stop_propagation();
                    dispatcher.dispatch(Action::ToggleFavorite(favorite_id.clone()));
                }
            >
                "★"
            </div>
            <div class="hover-info">
                <h4>"Work Preferences"</h4>
                {summary}
            </div>
        </div>
    }
}

//! 検索・並び替え・絞り込み

use crate::app::Dispatcher;
use abno_catalog_common::{Action, Filter, SortKey};
use leptos::prelude::*;

#[component]
pub fn Controls(dispatcher: Dispatcher) -> impl IntoView {
    let state = dispatcher.state();

    let on_clear = move |_| {
        if gloo::dialogs::confirm("Are you sure you want to clear all your favorites?") {
            dispatcher.dispatch(Action::ClearFavorites);
        }
    };

    view! {
        <div class="controls">
            <input
                type="text"
                id="search-bar"
                placeholder="Search by name or ID..."
                prop:value=move || state.with(|s| s.view.search.clone())
                on:input=move |ev| {
                    dispatcher.dispatch(Action::SetSearch(event_target_value(&ev)));
                }
            />

            <select
                id="sort-select"
                on:change=move |ev| match event_target_value(&ev).parse::<SortKey>() {
                    Ok(sort) => dispatcher.dispatch(Action::SetSort(sort)),
                    Err(e) => tracing::warn!("{}", e),
                }
            >
                {SortKey::ALL
                    .into_iter()
                    .map(|key| {
                        view! {
                            <option
                                value=key.as_str()
                                selected=move || state.with(|s| s.view.sort == key)
                            >
                                {key.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>

            <nav class="category-filters">
                {Filter::ALL
                    .into_iter()
                    .map(|filter| {
                        view! {
                            <a
                                href="#"
                                class="category-filter"
                                class:active=move || state.with(|s| s.view.filter == filter)
                                on:click=move |ev: web_sys::MouseEvent| {
                                    ev.prevent_default();
                                    dispatcher.dispatch(Action::SetFilter(filter));
                                }
                            >
                                {filter.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>

            <button id="clear-favorites-btn" class="btn btn-secondary" on:click=on_clear>
                "Clear favorites"
            </button>
        </div>
    }
}

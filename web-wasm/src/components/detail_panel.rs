//! 詳細パネル（モーダル）
//!
//! 背景か×ボタンで閉じる。脱走情報がある場合のみタブを表示する。
//! タブの切り替えはモーダル内のシグナルだけで行い、アプリ状態には触れない。

use crate::app::Dispatcher;
use abno_catalog_common::detail::{
    BreachView, DamageInfo, WorkInfo, DEFAULT_OBSERVATION_TEXT, LEVEL_LABELS,
};
use abno_catalog_common::types::PLACEHOLDER_IMAGE;
use abno_catalog_common::{Action, DetailPanel, DetailTab, ObservationSection};
use leptos::prelude::*;

#[component]
pub fn DetailPanelView(dispatcher: Dispatcher) -> impl IntoView {
    let state = dispatcher.state();
    // 開いているIDが変わった時だけパネルを組み立てる
    let open_id = Memo::new(move |_| state.with(|s| s.detail.as_ref().map(|d| d.id.clone())));
    let panel = Memo::new(move |_| {
        open_id
            .get()
            .and_then(|id| state.with_untracked(|s| s.entity(&id).map(DetailPanel::build)))
    });

    move || {
        panel
            .get()
            .map(|panel| view! { <DetailModal panel=panel dispatcher=dispatcher /> })
    }
}

#[component]
fn DetailModal(panel: DetailPanel, dispatcher: Dispatcher) -> impl IntoView {
    let state = dispatcher.state();
    let (tabs, set_tabs) = signal(panel.initial_tabs());
    let (portrait_failed, set_portrait_failed) = signal(false);
    let portrait = panel.portrait.clone();

    let tab_bar = (panel.tabs().len() > 1).then(|| {
        panel
            .tabs()
            .into_iter()
            .map(|tab| {
                view! {
                    <button
                        class="modal-tab"
                        class:active=move || tabs.get().is_active(tab)
                        on:click=move |_| {
                            set_tabs.update(|t| {
                                t.select(tab);
                            });
                        }
                    >
                        {tab.label()}
                    </button>
                }
            })
            .collect_view()
    });

    let stars = panel
        .rating_levels
        .iter()
        .map(|&rating| {
            let id = panel.id.clone();
            view! {
                <span
                    class="star"
                    data-value=rating.value().to_string()
                    on:click=move |_| dispatcher.dispatch(Action::Rate { id: id.clone(), rating })
                >
                    "★"
                </span>
            }
        })
        .collect_view();

    let breach_content = panel.breach.clone().map(|breach| {
        view! {
            <div
                class="modal-tab-content"
                class:active=move || tabs.get().is_active(DetailTab::Breach)
            >
                <BreachContent breach=breach />
            </div>
        }
    });

    view! {
        <div
            id="modal-container"
            class="modal-container"
            on:click=move |_| dispatcher.dispatch(Action::CloseDetail)
        >
            <div class="modal-content" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                <span
                    id="close-button"
                    class="close-button"
                    on:click=move |_| dispatcher.dispatch(Action::CloseDetail)
                >
                    "×"
                </span>

                <div class="modal-header">
                    <h2>{panel.name.clone()}</h2>
                    <p>{format!("{} | Risk Level: {}", panel.id, panel.risk_label)}</p>
                </div>

                {tab_bar.map(|bar| view! { <div class="modal-tabs">{bar}</div> })}

                <div class="modal-body-content">
                    <div class="modal-left-column">
                        <img
                            class="modal-portrait"
                            src=move || {
                                if portrait_failed.get() {
                                    PLACEHOLDER_IMAGE.to_string()
                                } else {
                                    portrait.clone()
                                }
                            }
                            alt=panel.name.clone()
                            on:error=move |_| set_portrait_failed.set(true)
                        />
                        <div class="modal-section">
                            <div class="modal-section-header">"Rate this Abnormality"</div>
                            <div class="rating-stars">{stars}</div>
                            {move || {
                                state
                                    .with(|s| s.notice.clone())
                                    .map(|notice| view! { <p class="rating-error">{notice}</p> })
                            }}
                        </div>
                        <Observation section=panel.observation.clone() />
                    </div>
                    <div
                        class="modal-tab-content"
                        class:active=move || tabs.get().is_active(DetailTab::Work)
                    >
                        <WorkContent work=panel.work.clone() />
                    </div>
                    {breach_content}
                </div>
            </div>
        </div>
    }
}

#[component]
fn Observation(section: ObservationSection) -> impl IntoView {
    let body = match section {
        ObservationSection::Prompt { prompt, choices } => {
            let choices = choices
                .into_iter()
                .map(|line| view! { <li class=line.css_class>{format!("{} {}", line.icon, line.text)}</li> })
                .collect_view();
            view! {
                <div class="observation-prompt">{prompt}</div>
                <ul class="observation-choices">{choices}</ul>
            }
            .into_any()
        }
        ObservationSection::Default => {
            view! { <p class="default-observation">{DEFAULT_OBSERVATION_TEXT}</p> }.into_any()
        }
    };

    view! {
        <div class="modal-section">
            <div class="modal-section-header">"Observation"</div>
            {body}
        </div>
    }
}

fn damage_view(damage: DamageInfo) -> impl IntoView {
    let alt = damage.label.clone();
    view! {
        <div class="icon-text">
            <img src=damage.icon alt=alt />
            <span class=damage.css_class>{damage.label}</span>
            <span>{format!("\u{a0}({})", damage.amount)}</span>
        </div>
    }
}

#[component]
fn WorkContent(work: WorkInfo) -> impl IntoView {
    let emotional = work.emotional_states.map(|states| {
        view! {
            <div class="modal-section">
                <div class="modal-section-header">"Emotional States"</div>
                <div class="info-grid">
                    <div class="icon-text"><img src="static/images/ui/good.png" alt="Good" />"Good:"</div>
                    <div class="emotional-good">{states.good}</div>
                    <div class="icon-text"><img src="static/images/ui/normal.png" alt="Normal" />"Normal:"</div>
                    <div class="emotional-normal">{states.normal}</div>
                    <div class="icon-text"><img src="static/images/ui/bad.png" alt="Bad" />"Bad:"</div>
                    <div class="emotional-bad">{states.bad}</div>
                </div>
            </div>
        }
    });

    let headers = LEVEL_LABELS.iter().map(|l| view! { <th>{*l}</th> }).collect_view();
    let rows = work
        .preferences
        .into_iter()
        .map(|row| {
            let cells = row.cells.into_iter().map(|c| view! { <td>{c}</td> }).collect_view();
            view! {
                <tr>
                    <td class="icon-text">
                        <img src=row.work.icon() alt=row.work.label() />
                        <span class=row.work.css_class()>{row.work.label()}</span>
                    </td>
                    {cells}
                </tr>
            }
        })
        .collect_view();

    let guides = work
        .guides
        .into_iter()
        .map(|guide| view! { <li>{guide}</li> })
        .collect_view();

    view! {
        <div class="modal-right-column">
            <div class="modal-section">
                <div class="modal-section-header">"Basic Information"</div>
                <div class="info-grid">
                    <div>"Damage Type:"</div>
                    {damage_view(work.damage)}
                    <div>"E-Box Yield:"</div>
                    <div>{work.e_box_yield}</div>
                    <div>"Qliphoth:"</div>
                    <div>{work.qliphoth_counter}</div>
                </div>
            </div>
            {emotional}
            <div class="modal-section">
                <div class="modal-section-header">"Work Preferences (Level I-V)"</div>
                <table class="work-pref-table">
                    <thead>
                        <tr><th>"Type"</th>{headers}</tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
            <div class="modal-section">
                <div class="modal-section-header">"Management Guides"</div>
                <ul class="guides-list">{guides}</ul>
            </div>
        </div>
    }
}

#[component]
fn BreachContent(breach: BreachView) -> impl IntoView {
    let resistances = breach
        .resistances
        .into_iter()
        .map(|row| {
            let key = row.kind.key();
            view! {
                <div class="icon-text">
                    <img src=format!("static/images/ui/damage_{}.png", key) alt=row.kind.label() />
                    <span class=format!("damage-type-{}", key)>{row.kind.label()}</span>
                </div>
                <div><span class=row.class.css_class()>{row.multiplier}</span></div>
            }
        })
        .collect_view();

    view! {
        <div class="modal-right-column">
            <div class="modal-section">
                <div class="modal-section-header">"Combat Stats"</div>
                <div class="info-grid">
                    <div>"HP:"</div>
                    <div>{breach.hp}</div>
                    <div>"Attack:"</div>
                    {damage_view(breach.attack)}
                </div>
            </div>
            <div class="modal-section">
                <div class="modal-section-header">"Resistances"</div>
                <div class="info-grid">{resistances}</div>
            </div>
        </div>
    }
}

//! 端末描画テスト

use abno_catalog::render::{render_detail, render_grid};
use abno_catalog_common::{
    parse_catalog, AppState, DetailPanel, DetailTab, Favorites, GridView, Ratings,
    NO_RESULTS_TEXT,
};

const CATALOG: &str = r#"[
    {
        "id": "O-03-03",
        "name": "One Sin and Hundreds of Good Deeds",
        "riskLevel": "ZAYIN",
        "damage": { "type": "WHITE", "amount": "1-2" },
        "eBoxYield": 12,
        "qliphothCounter": 2,
        "workPreferences": {
            "instinct": [0.7, 0.7, 0.5, 0.5, 0.55],
            "insight": [0.7, 0.7, 0.5, 0.5, 0.5]
        },
        "managementGuides": ["Do not stare."],
        "observation": {
            "prompt": "What do you see?",
            "choices": [
                { "choice": "A skull", "isCorrect": true },
                { "choice": "Nothing", "isCorrect": false }
            ]
        }
    },
    {
        "id": "T-01-54",
        "name": "Spider Bud",
        "riskLevel": "TETH",
        "breachInfo": {
            "hp": 800,
            "attack": { "type": "RED", "amount": "3-5" },
            "resistances": { "red": 0.5, "white": 1.0, "black": 2.0, "pale": 0.0 }
        }
    }
]"#;

fn state() -> AppState {
    let mut state = AppState::new("user-1", Favorites::from_ids(["T-01-54"]));
    state.apply(abno_catalog_common::Action::CatalogLoaded {
        entities: parse_catalog(CATALOG).unwrap(),
        ratings: Ratings::new(),
    });
    state
}

#[test]
fn test_render_grid_rows() {
    let out = render_grid(&state().grid());

    // 危険度の高い順
    let teth = out.find("T-01-54").expect("T-01-54が表示されるべき");
    let zayin = out.find("O-03-03").expect("O-03-03が表示されるべき");
    assert!(teth < zayin);

    assert!(out.contains("★ T-01-54"));
    assert!(out.contains("☆ O-03-03"));
    assert!(out.contains("★ N/A (0)"));
    assert!(out.contains("Instinct 55%"));
    assert!(out.contains("2件"));
}

#[test]
fn test_render_grid_states() {
    assert_eq!(render_grid(&GridView::Loading), "Loading...\n");
    assert_eq!(render_grid(&GridView::Empty), format!("{}\n", NO_RESULTS_TEXT));
    assert!(render_grid(&GridView::Error("HTTP 500".into())).contains("Error loading data: HTTP 500"));
}

#[test]
fn test_render_detail_work_tab() {
    let state = state();
    let panel = DetailPanel::build(state.entity("O-03-03").unwrap());
    let out = render_detail(&panel, DetailTab::Work);

    assert!(out.contains("One Sin and Hundreds of Good Deeds"));
    assert!(out.contains("Risk Level: ZAYIN"));
    assert!(out.contains("[Work Info]"));
    assert!(!out.contains("Breach Info"));
    assert!(out.contains("What do you see?"));
    assert!(out.contains("✅ A skull"));
    assert!(out.contains("❌ Nothing"));
    assert!(out.contains("E-Box Yield: 12"));
    assert!(out.contains("1. Do not stare."));
}

#[test]
fn test_render_detail_breach_tab() {
    let state = state();
    let panel = DetailPanel::build(state.entity("T-01-54").unwrap());
    let out = render_detail(&panel, DetailTab::Breach);

    assert!(out.contains("[Breach Info]"));
    assert!(out.contains("HP:     800"));
    assert!(out.contains("(resistant)"));
    assert!(out.contains("(immune)"));
    assert!(out.contains("(vulnerable)"));
    // 観測問題が無ければ既定の文言
    assert!(out.contains("Default Answer: Approach"));
}

/// 脱走情報が無いのに脱走タブを指定した場合は作業情報を描く
#[test]
fn test_render_detail_layout() {
    let state = state();
    let panel = DetailPanel::build(state.entity("O-03-03").unwrap());
    let out = render_detail(&panel, DetailTab::Breach);

    assert!(out.starts_with(
        "One Sin and Hundreds of Good Deeds\nO-03-03 | Risk Level: ZAYIN\n[Work Info]\n\n== Observation ==\n"
    ));
    assert!(out.contains("Type            I   II  III   IV    V\n"));
    assert!(out.contains("Instinct      70%  70%  50%  50%  55%\n"));
    assert!(out.ends_with("== Management Guides ==\n1. Do not stare.\n"));
}

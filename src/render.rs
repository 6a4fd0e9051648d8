//! 端末向けの描画
//!
//! GridView / DetailPanel をテキストに変換する。

use abno_catalog_common::detail::{
    BreachView, DamageInfo, WorkInfo, DEFAULT_OBSERVATION_TEXT, LEVEL_LABELS,
};
use abno_catalog_common::{DetailPanel, DetailTab, GridView, ObservationSection, NO_RESULTS_TEXT};
use std::fmt;

/// グリッドを一覧表として描画
pub fn render_grid(grid: &GridView) -> String {
    GridText(grid).to_string()
}

/// 詳細パネルを描画（指定タブのみ）
pub fn render_detail(panel: &DetailPanel, tab: DetailTab) -> String {
    DetailText { panel, tab }.to_string()
}

struct GridText<'a>(&'a GridView);

impl fmt::Display for GridText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards = match self.0 {
            GridView::Loading => return writeln!(f, "Loading..."),
            GridView::Error(message) => return writeln!(f, "Error loading data: {}", message),
            GridView::Empty => return writeln!(f, "{}", NO_RESULTS_TEXT),
            GridView::Cards(cards) => cards,
        };

        for card in cards {
            let star = if card.is_favorite { "★" } else { "☆" };
            let summary: Vec<String> = card
                .work_summary
                .iter()
                .map(|w| format!("{} {}", w.work.label(), w.percent))
                .collect();
            writeln!(
                f,
                "{} {:<12} {:<32} {:<14} {}",
                star,
                card.id,
                card.name,
                card.rating,
                summary.join(" / ")
            )?;
        }
        writeln!(f, "\n{}件", cards.len())
    }
}

struct DetailText<'a> {
    panel: &'a DetailPanel,
    tab: DetailTab,
}

impl fmt::Display for DetailText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let panel = self.panel;
        writeln!(f, "{}", panel.name)?;
        writeln!(f, "{} | Risk Level: {}", panel.id, panel.risk_label)?;

        let tabs: Vec<String> = panel
            .tabs()
            .iter()
            .map(|t| {
                if *t == self.tab {
                    format!("[{}]", t.label())
                } else {
                    t.label().to_string()
                }
            })
            .collect();
        writeln!(f, "{}\n", tabs.join("  "))?;

        write_observation(f, &panel.observation)?;

        match (self.tab, panel.breach.as_ref()) {
            (DetailTab::Breach, Some(breach)) => write_breach(f, breach),
            _ => write_work(f, &panel.work),
        }
    }
}

fn write_observation(f: &mut fmt::Formatter<'_>, observation: &ObservationSection) -> fmt::Result {
    writeln!(f, "== Observation ==")?;
    match observation {
        ObservationSection::Prompt { prompt, choices } => {
            writeln!(f, "{}", prompt)?;
            for choice in choices {
                writeln!(f, "  {} {}", choice.icon, choice.text)?;
            }
        }
        ObservationSection::Default => writeln!(f, "{}", DEFAULT_OBSERVATION_TEXT)?,
    }
    writeln!(f)
}

fn damage_text(damage: &DamageInfo) -> String {
    format!("{} ({})", damage.label, damage.amount)
}

fn write_work(f: &mut fmt::Formatter<'_>, work: &WorkInfo) -> fmt::Result {
    writeln!(f, "== Basic Information ==")?;
    writeln!(f, "Damage Type: {}", damage_text(&work.damage))?;
    writeln!(f, "E-Box Yield: {}", work.e_box_yield)?;
    writeln!(f, "Qliphoth:    {}\n", work.qliphoth_counter)?;

    if let Some(states) = &work.emotional_states {
        writeln!(f, "== Emotional States ==")?;
        writeln!(f, "Good:   {}", states.good)?;
        writeln!(f, "Normal: {}", states.normal)?;
        writeln!(f, "Bad:    {}\n", states.bad)?;
    }

    writeln!(f, "== Work Preferences (Level I-V) ==")?;
    let header: String = LEVEL_LABELS.iter().map(|l| format!("{:>5}", l)).collect();
    writeln!(f, "{:<12}{}", "Type", header)?;
    for row in &work.preferences {
        let cells: String = row.cells.iter().map(|c| format!("{:>5}", c)).collect();
        writeln!(f, "{:<12}{}", row.work.label(), cells)?;
    }
    writeln!(f)?;

    writeln!(f, "== Management Guides ==")?;
    for (i, guide) in work.guides.iter().enumerate() {
        writeln!(f, "{}. {}", i + 1, guide)?;
    }
    Ok(())
}

fn write_breach(f: &mut fmt::Formatter<'_>, breach: &BreachView) -> fmt::Result {
    writeln!(f, "== Combat Stats ==")?;
    writeln!(f, "HP:     {}", breach.hp)?;
    writeln!(f, "Attack: {}\n", damage_text(&breach.attack))?;

    writeln!(f, "== Resistances ==")?;
    for row in &breach.resistances {
        writeln!(f, "{:<6} {} ({})", row.kind.label(), row.multiplier, row.class.as_str())?;
    }
    Ok(())
}

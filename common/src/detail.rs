//! 詳細パネルの組み立て
//!
//! Entity 1件から詳細パネルの表示内容を作る。
//! - ヘッダー（名前・ID・危険度）と評価ウィジェット
//! - 観察（質問と選択肢、無ければ既定の回答）
//! - 作業情報タブ（既定で表示）
//! - 脱走情報タブ（脱走データがある場合のみ）

use crate::card::format_percent;
use crate::rating::RatingValue;
use crate::types::{
    Damage, DamageKind, EmotionalStates, Entity, ResistanceType, WorkPreferences, WorkType,
    NOT_AVAILABLE,
};

/// 観察データが無い場合の表示
pub const DEFAULT_OBSERVATION_TEXT: &str = "Default Answer: Approach";

/// 作業適性表の列見出し
pub const LEVEL_LABELS: [&str; WorkPreferences::LEVELS] = ["I", "II", "III", "IV", "V"];

/// タブ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Work,
    Breach,
}

impl DetailTab {
    pub fn key(&self) -> &'static str {
        match self {
            DetailTab::Work => "work",
            DetailTab::Breach => "breach",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DetailTab::Work => "Work Info",
            DetailTab::Breach => "Breach Info",
        }
    }
}

/// タブの選択状態（常にどれか1つだけが有効）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabState {
    active: DetailTab,
    has_breach: bool,
}

impl TabState {
    pub fn new(has_breach: bool) -> Self {
        Self {
            active: DetailTab::Work,
            has_breach,
        }
    }

    pub fn active(&self) -> DetailTab {
        self.active
    }

    /// タブを切り替える。存在しないタブは無視してfalseを返す
    pub fn select(&mut self, tab: DetailTab) -> bool {
        if tab == DetailTab::Breach && !self.has_breach {
            return false;
        }
        self.active = tab;
        true
    }

    pub fn is_active(&self, tab: DetailTab) -> bool {
        self.active == tab
    }
}

/// ダメージの表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct DamageInfo {
    pub label: String,
    pub css_class: String,
    pub icon: String,
    pub amount: String,
}

impl DamageInfo {
    pub fn from_damage(damage: Option<&Damage>) -> Self {
        let (label, key) = match damage.and_then(|d| d.kind.as_ref()) {
            Some(kind) if kind.is_random() => ("Random".to_string(), "random".to_string()),
            Some(DamageKind::Single(label)) if !label.is_empty() => {
                (label.clone(), label.to_lowercase())
            }
            // is_random() で候補配列は全て上で処理済み
            Some(DamageKind::Choices(_)) => ("Random".to_string(), "random".to_string()),
            _ => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_lowercase()),
        };

        let amount = damage
            .and_then(Damage::value)
            .map_or_else(|| NOT_AVAILABLE.to_string(), |a| a.to_string());

        Self {
            label,
            css_class: format!("damage-type-{}", key),
            icon: format!("static/images/ui/damage_{}.png", key),
            amount,
        }
    }

    pub fn is_random(&self) -> bool {
        self.css_class == "damage-type-random"
    }
}

/// 耐性の分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResistanceClass {
    Heals,
    Immune,
    Resistant,
    Normal,
    Vulnerable,
}

impl ResistanceClass {
    /// 倍率から分類（負=回復、0=無効、1未満=耐性、1=通常、1超=弱点）
    pub fn classify(value: f64) -> Self {
        if value < 0.0 {
            ResistanceClass::Heals
        } else if value == 0.0 {
            ResistanceClass::Immune
        } else if value < 1.0 {
            ResistanceClass::Resistant
        } else if value == 1.0 {
            ResistanceClass::Normal
        } else {
            ResistanceClass::Vulnerable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResistanceClass::Heals => "heals",
            ResistanceClass::Immune => "immune",
            ResistanceClass::Resistant => "resistant",
            ResistanceClass::Normal => "normal",
            ResistanceClass::Vulnerable => "vulnerable",
        }
    }

    pub fn css_class(&self) -> String {
        format!("res-{}", self.as_str())
    }
}

/// 耐性表の1行
#[derive(Debug, Clone, PartialEq)]
pub struct ResistanceRow {
    pub kind: ResistanceType,
    pub multiplier: String,
    pub class: ResistanceClass,
}

/// 作業適性表の1行
#[derive(Debug, Clone, PartialEq)]
pub struct PreferenceRow {
    pub work: WorkType,
    pub cells: Vec<String>,
}

/// 観察の選択肢1行
///
/// 正誤はアイコンでのみ示す
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationLine {
    pub text: String,
    pub icon: &'static str,
    pub css_class: &'static str,
}

/// 観察セクション
#[derive(Debug, Clone, PartialEq)]
pub enum ObservationSection {
    Prompt {
        prompt: String,
        choices: Vec<ObservationLine>,
    },
    Default,
}

impl ObservationSection {
    fn build(entity: &Entity) -> Self {
        let Some((prompt, choices)) = entity
            .observation
            .as_ref()
            .and_then(|obs| obs.choices.as_ref().map(|choices| (&obs.prompt, choices)))
        else {
            return ObservationSection::Default;
        };

        let choices = choices
            .iter()
            .map(|item| {
                let (icon, css_class) = if item.is_correct {
                    ("✅", "correct-choice")
                } else {
                    ("❌", "incorrect-choice")
                };
                ObservationLine {
                    text: item.choice.clone(),
                    icon,
                    css_class,
                }
            })
            .collect();

        ObservationSection::Prompt {
            prompt: prompt.clone(),
            choices,
        }
    }
}

/// 作業情報タブ
#[derive(Debug, Clone, PartialEq)]
pub struct WorkInfo {
    pub damage: DamageInfo,
    pub e_box_yield: String,
    pub qliphoth_counter: String,
    pub emotional_states: Option<EmotionalStates>,
    pub preferences: Vec<PreferenceRow>,
    pub guides: Vec<String>,
}

/// 脱走情報タブ
#[derive(Debug, Clone, PartialEq)]
pub struct BreachView {
    pub hp: String,
    pub attack: DamageInfo,
    pub resistances: Vec<ResistanceRow>,
}

/// 詳細パネル全体
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanel {
    pub id: String,
    pub name: String,
    pub risk_label: String,
    pub portrait: String,
    pub rating_levels: [RatingValue; 5],
    pub observation: ObservationSection,
    pub work: WorkInfo,
    pub breach: Option<BreachView>,
}

impl DetailPanel {
    pub fn build(entity: &Entity) -> Self {
        let work = WorkInfo {
            damage: DamageInfo::from_damage(entity.damage.as_ref()),
            e_box_yield: optional_number(entity.e_box_yield),
            qliphoth_counter: optional_number(entity.qliphoth_counter),
            emotional_states: entity.emotional_states.clone(),
            preferences: preference_rows(&entity.work_preferences),
            guides: entity.management_guides.clone(),
        };

        let breach = entity.breach_info.as_ref().map(|info| BreachView {
            hp: info
                .hp
                .as_ref()
                .map_or_else(|| NOT_AVAILABLE.to_string(), |hp| hp.to_string()),
            attack: DamageInfo::from_damage(info.attack.as_ref()),
            resistances: ResistanceType::ALL
                .iter()
                .filter_map(|&kind| {
                    info.resistances.get(kind).map(|value| ResistanceRow {
                        kind,
                        multiplier: format!("x{}", value),
                        class: ResistanceClass::classify(value),
                    })
                })
                .collect(),
        });

        Self {
            id: entity.id.clone(),
            name: entity.display_name().to_string(),
            risk_label: entity.risk_label().to_string(),
            portrait: entity.portrait_image().to_string(),
            rating_levels: RatingValue::ALL,
            observation: ObservationSection::build(entity),
            work,
            breach,
        }
    }

    /// 表示するタブ（脱走データが無ければ作業情報のみ）
    pub fn tabs(&self) -> Vec<DetailTab> {
        if self.breach.is_some() {
            vec![DetailTab::Work, DetailTab::Breach]
        } else {
            vec![DetailTab::Work]
        }
    }

    pub fn initial_tabs(&self) -> TabState {
        TabState::new(self.breach.is_some())
    }
}

fn optional_number(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

fn preference_rows(prefs: &WorkPreferences) -> Vec<PreferenceRow> {
    WorkType::ALL
        .iter()
        .map(|&work| PreferenceRow {
            work,
            cells: (0..WorkPreferences::LEVELS)
                .map(|level| format_percent(prefs.level(work, level)))
                .collect(),
        })
        .collect()
}

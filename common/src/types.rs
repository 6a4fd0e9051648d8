//! カタログの型定義
//!
//! サーバーから受け取るアブノーマリティ（Entity）と評価集計（RatingAggregate）。
//! 欠けている項目は全てOptionかデフォルト値で受け、表示側で補完する。

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// 画像が無い・読み込めない場合の代替画像
pub const PLACEHOLDER_IMAGE: &str = "static/images/ui/placeholder.png";

/// 未設定項目の表示
pub const NOT_AVAILABLE: &str = "N/A";

/// 名前が無い場合の表示
pub const UNNAMED: &str = "Unnamed";

/// 危険度クラス
///
/// 既知のラベル以外は `Other` として保持し、ソートでは最下位に扱う
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskLevel {
    Zayin,
    Teth,
    He,
    Waw,
    Aleph,
    Other(String),
}

impl RiskLevel {
    pub fn label(&self) -> &str {
        match self {
            RiskLevel::Zayin => "ZAYIN",
            RiskLevel::Teth => "TETH",
            RiskLevel::He => "HE",
            RiskLevel::Waw => "WAW",
            RiskLevel::Aleph => "ALEPH",
            RiskLevel::Other(label) => label,
        }
    }

    /// ソート用の重み（ZAYIN=0 … ALEPH=4、不明=-1）
    pub fn rank(&self) -> i32 {
        match self {
            RiskLevel::Zayin => 0,
            RiskLevel::Teth => 1,
            RiskLevel::He => 2,
            RiskLevel::Waw => 3,
            RiskLevel::Aleph => 4,
            RiskLevel::Other(_) => -1,
        }
    }

    /// カード枠色用のCSSクラス
    pub fn css_class(&self) -> String {
        format!("risk-{}", self.label().to_lowercase())
    }
}

impl From<String> for RiskLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ZAYIN" => RiskLevel::Zayin,
            "TETH" => RiskLevel::Teth,
            "HE" => RiskLevel::He,
            "WAW" => RiskLevel::Waw,
            "ALEPH" => RiskLevel::Aleph,
            _ => RiskLevel::Other(value),
        }
    }
}

impl From<RiskLevel> for String {
    fn from(value: RiskLevel) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 作業種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkType {
    Instinct,
    Insight,
    Attachment,
    Repression,
}

impl WorkType {
    /// 表示順
    pub const ALL: [WorkType; 4] = [
        WorkType::Instinct,
        WorkType::Insight,
        WorkType::Attachment,
        WorkType::Repression,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            WorkType::Instinct => "instinct",
            WorkType::Insight => "insight",
            WorkType::Attachment => "attachment",
            WorkType::Repression => "repression",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkType::Instinct => "Instinct",
            WorkType::Insight => "Insight",
            WorkType::Attachment => "Attachment",
            WorkType::Repression => "Repression",
        }
    }

    pub fn icon(&self) -> String {
        format!("static/images/ui/{}.png", self.key())
    }

    pub fn css_class(&self) -> String {
        format!("work-type-{}", self.key())
    }
}

/// 作業適性（レベルI〜Vの5段階、0.0〜1.0）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkPreferences {
    pub instinct: Option<Vec<f64>>,
    pub insight: Option<Vec<f64>>,
    pub attachment: Option<Vec<f64>>,
    pub repression: Option<Vec<f64>>,
}

impl WorkPreferences {
    /// 作業種別ごとのレベル数
    pub const LEVELS: usize = 5;

    pub fn get(&self, work: WorkType) -> Option<&[f64]> {
        match work {
            WorkType::Instinct => self.instinct.as_deref(),
            WorkType::Insight => self.insight.as_deref(),
            WorkType::Attachment => self.attachment.as_deref(),
            WorkType::Repression => self.repression.as_deref(),
        }
    }

    /// 指定レベル（0始まり）の適性値。欠けていれば0
    pub fn level(&self, work: WorkType, index: usize) -> f64 {
        self.get(work)
            .and_then(|values| values.get(index))
            .copied()
            .unwrap_or(0.0)
    }
}

/// ダメージ種別
///
/// 候補の配列で来た場合はランダム扱い
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DamageKind {
    Single(String),
    Choices(Vec<String>),
}

impl DamageKind {
    pub fn is_random(&self) -> bool {
        match self {
            DamageKind::Choices(_) => true,
            DamageKind::Single(label) => label.eq_ignore_ascii_case("random"),
        }
    }
}

/// 数値または文字列（"3-5" のような範囲表記）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(value) => write!(f, "{}", value),
            Amount::Text(text) => f.write_str(text),
        }
    }
}

/// ダメージ（作業時・脱走時の攻撃）
///
/// 量は `damage` と `amount` のどちらのキーでも来る。両方あれば `damage` を優先
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Damage {
    #[serde(rename = "type")]
    pub kind: Option<DamageKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
}

impl Damage {
    /// 表示に使う量
    pub fn value(&self) -> Option<&Amount> {
        self.damage.as_ref().or(self.amount.as_ref())
    }
}

/// 感情状態ごとの説明
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionalStates {
    pub good: String,
    pub normal: String,
    pub bad: String,
}

/// 耐性の属性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResistanceType {
    Red,
    White,
    Black,
    Pale,
}

impl ResistanceType {
    /// 表示順
    pub const ALL: [ResistanceType; 4] = [
        ResistanceType::Red,
        ResistanceType::White,
        ResistanceType::Black,
        ResistanceType::Pale,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ResistanceType::Red => "red",
            ResistanceType::White => "white",
            ResistanceType::Black => "black",
            ResistanceType::Pale => "pale",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResistanceType::Red => "Red",
            ResistanceType::White => "White",
            ResistanceType::Black => "Black",
            ResistanceType::Pale => "Pale",
        }
    }
}

/// 属性ごとの被ダメージ倍率
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resistances {
    pub red: Option<f64>,
    pub white: Option<f64>,
    pub black: Option<f64>,
    pub pale: Option<f64>,
}

impl Resistances {
    pub fn get(&self, kind: ResistanceType) -> Option<f64> {
        match kind {
            ResistanceType::Red => self.red,
            ResistanceType::White => self.white,
            ResistanceType::Black => self.black,
            ResistanceType::Pale => self.pale,
        }
    }
}

/// 脱走時の戦闘情報
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreachInfo {
    pub hp: Option<Amount>,
    pub attack: Option<Damage>,
    pub resistances: Resistances,
}

/// 観察の選択肢
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObservationChoice {
    pub choice: String,
    pub is_correct: bool,
}

/// 観察（質問と選択肢）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Observation {
    pub prompt: String,
    pub choices: Option<Vec<ObservationChoice>>,
}

/// アブノーマリティ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub risk_level: Option<RiskLevel>,

    #[serde(default)]
    pub preview_image: Option<String>,

    #[serde(default)]
    pub portrait_image: Option<String>,

    #[serde(default)]
    pub work_preferences: WorkPreferences,

    #[serde(default)]
    pub damage: Option<Damage>,

    #[serde(default)]
    pub e_box_yield: Option<f64>,

    #[serde(default)]
    pub qliphoth_counter: Option<f64>,

    #[serde(default)]
    pub emotional_states: Option<EmotionalStates>,

    #[serde(default)]
    pub management_guides: Vec<String>,

    #[serde(default)]
    pub breach_info: Option<BreachInfo>,

    #[serde(default)]
    pub observation: Option<Observation>,
}

impl Entity {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED)
    }

    pub fn risk_rank(&self) -> i32 {
        self.risk_level.as_ref().map_or(-1, RiskLevel::rank)
    }

    pub fn risk_label(&self) -> &str {
        self.risk_level.as_ref().map_or(NOT_AVAILABLE, RiskLevel::label)
    }

    pub fn preview_image(&self) -> &str {
        self.preview_image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn portrait_image(&self) -> &str {
        self.portrait_image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }
}

/// 評価集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingAggregate {
    pub average: f64,
    pub count: u32,
}

/// アブノーマリティID → 評価集計
pub type Ratings = HashMap<String, RatingAggregate>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_deserialize_full() {
        let json = r#"{
            "id": "O-01-04",
            "name": "Punishing Bird",
            "riskLevel": "TETH",
            "previewImage": "static/images/o-01-04.png",
            "workPreferences": {
                "instinct": [0.5, 0.5, 0.4, 0.4, 0.4],
                "insight": [0.45, 0.45, 0.4, 0.4, 0.4]
            },
            "damage": {"type": "RED", "amount": "1-2"},
            "eBoxYield": 12,
            "qliphothCounter": 3,
            "emotionalStates": {"good": "10-12", "normal": "6-9", "bad": "0-5"},
            "managementGuides": ["Guide 1", "Guide 2"],
            "breachInfo": {
                "hp": 300,
                "attack": {"type": "RED", "amount": "1-3"},
                "resistances": {"red": 1.5, "white": 0.5}
            },
            "observation": {
                "prompt": "What do you do?",
                "choices": [{"choice": "Feed it", "isCorrect": true}]
            }
        }"#;

        let entity: Entity = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(entity.id, "O-01-04");
        assert_eq!(entity.display_name(), "Punishing Bird");
        assert_eq!(entity.risk_level, Some(RiskLevel::Teth));
        assert_eq!(entity.work_preferences.level(WorkType::Instinct, 4), 0.4);
        assert_eq!(entity.e_box_yield, Some(12.0));
        assert_eq!(entity.management_guides.len(), 2);

        let breach = entity.breach_info.expect("breachInfoが無い");
        assert_eq!(breach.resistances.get(ResistanceType::Red), Some(1.5));
        assert_eq!(breach.resistances.get(ResistanceType::Pale), None);

        let observation = entity.observation.expect("observationが無い");
        let choices = observation.choices.expect("choicesが無い");
        assert!(choices[0].is_correct);
    }

    #[test]
    fn test_entity_deserialize_minimal() {
        let json = r#"{"id": "T-01-01"}"#;

        let entity: Entity = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(entity.display_name(), UNNAMED);
        assert_eq!(entity.risk_label(), NOT_AVAILABLE);
        assert_eq!(entity.risk_rank(), -1);
        assert_eq!(entity.preview_image(), PLACEHOLDER_IMAGE);
        assert!(entity.management_guides.is_empty());
        assert!(entity.breach_info.is_none());
    }

    #[test]
    fn test_entity_missing_id_is_error() {
        let json = r#"{"name": "No Id"}"#;
        assert!(serde_json::from_str::<Entity>(json).is_err());
    }

    #[test]
    fn test_risk_level_unknown_label() {
        let entity: Entity =
            serde_json::from_str(r#"{"id": "X", "riskLevel": "KETER"}"#).expect("デシリアライズ失敗");
        let risk = entity.risk_level.clone().expect("riskLevelが無い");
        assert_eq!(risk, RiskLevel::Other("KETER".to_string()));
        assert_eq!(entity.risk_rank(), -1);
        assert_eq!(entity.risk_label(), "KETER");
    }

    #[test]
    fn test_risk_level_rank_order() {
        let ranks: Vec<i32> = ["ZAYIN", "TETH", "HE", "WAW", "ALEPH"]
            .iter()
            .map(|label| RiskLevel::from(label.to_string()).rank())
            .collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
        assert_eq!(RiskLevel::Waw.css_class(), "risk-waw");
    }

    #[test]
    fn test_risk_level_serialize_as_label() {
        let json = serde_json::to_string(&RiskLevel::Aleph).expect("シリアライズ失敗");
        assert_eq!(json, "\"ALEPH\"");
    }

    #[test]
    fn test_damage_random_list() {
        let damage: Damage =
            serde_json::from_str(r#"{"type": ["RED", "WHITE"], "amount": 4}"#).expect("デシリアライズ失敗");
        assert!(damage.kind.expect("typeが無い").is_random());
        assert_eq!(damage.value().expect("amountが無い").to_string(), "4");
    }

    #[test]
    fn test_damage_amount_alias() {
        let damage: Damage =
            serde_json::from_str(r#"{"type": "BLACK", "damage": "2-4"}"#).expect("デシリアライズ失敗");
        assert_eq!(damage.value(), Some(&Amount::Text("2-4".to_string())));
        assert!(!damage.kind.expect("typeが無い").is_random());
    }

    #[test]
    fn test_damage_both_keys_prefers_damage() {
        let damage: Damage = serde_json::from_str(r#"{"type": "RED", "damage": "1-2", "amount": 3}"#)
            .expect("デシリアライズ失敗");
        assert_eq!(damage.value(), Some(&Amount::Text("1-2".to_string())));

        let damage: Damage =
            serde_json::from_str(r#"{"type": "RED", "damage": null, "amount": 3}"#).expect("デシリアライズ失敗");
        assert_eq!(damage.value(), Some(&Amount::Number(3.0)));
    }

    #[test]
    fn test_work_preferences_missing_level() {
        let prefs = WorkPreferences {
            insight: Some(vec![0.1, 0.2]),
            ..Default::default()
        };
        assert_eq!(prefs.level(WorkType::Insight, 1), 0.2);
        assert_eq!(prefs.level(WorkType::Insight, 4), 0.0);
        assert_eq!(prefs.level(WorkType::Repression, 0), 0.0);
    }

    #[test]
    fn test_ratings_deserialize() {
        let json = r#"{"O-01-04": {"average": 3.5, "count": 2}}"#;
        let ratings: Ratings = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(ratings["O-01-04"].count, 2);
        assert_eq!(ratings["O-01-04"].average, 3.5);
    }
}

use serde::{Deserialize, Serialize};

pub const UNKNOWN_NAME: &str = "Unknown";
pub const DEFAULT_PT: &str = "0/0";

/// One card as extracted from a card-database page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub mana_cost: String,
    #[serde(default)]
    pub rules_text: String,
    #[serde(default = "default_pt")]
    pub power_toughness: String,
    #[serde(default)]
    pub source_url: String,
}

fn default_name() -> String {
    UNKNOWN_NAME.to_string()
}

fn default_pt() -> String {
    DEFAULT_PT.to_string()
}

impl CardRecord {
    /// Builds a record, applying the extractor defaults for blank
    /// name and P/T fields.
    pub fn new(
        name: impl Into<String>,
        mana_cost: impl Into<String>,
        rules_text: impl Into<String>,
        power_toughness: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mana_cost: mana_cost.into(),
            rules_text: rules_text.into(),
            power_toughness: power_toughness.into(),
            source_url: source_url.into(),
        }
        .normalized()
    }

    pub fn normalized(mut self) -> Self {
        if self.name.trim().is_empty() {
            self.name = default_name();
        }
        if self.power_toughness.trim().is_empty() {
            self.power_toughness = default_pt();
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCard {
    #[serde(flatten)]
    pub card: CardRecord,
    pub mana_points: u64,
    pub pt_points: u64,
    pub ability_points: u64,
    /// `mana_points + pt_points`; ability points are reported but not summed in.
    pub total_power: u64,
    /// `total_power - mana_points`
    pub balance: i64,
}

impl ScoredCard {
    pub fn new(card: CardRecord, mana_points: u64, pt_points: u64, ability_points: u64) -> Self {
        let total_power = mana_points.saturating_add(pt_points);
        let balance = to_i64(total_power).saturating_sub(to_i64(mana_points));
        Self {
            card,
            mana_points,
            pt_points,
            ability_points,
            total_power,
            balance,
        }
    }
}

fn to_i64(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

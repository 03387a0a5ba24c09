use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// A phrase or regex pattern with the points it is worth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedRule {
    pub pattern: String,
    pub points: i64,
}

impl WeightedRule {
    pub fn new(pattern: &str, points: i64) -> Self {
        Self {
            pattern: pattern.to_string(),
            points,
        }
    }
}

/// Named bonus for co-occurring ability fragments.
///
/// Fragments are checked in stride groups: with `half = len / 2`, group `i`
/// is `fragments[i], fragments[i + half], fragments[i + 2 * half], ...` and
/// the synergy fires when every group has at least one fragment present.
/// Lay out pairs as `[a1, b1, a2, b2]` to get "(a1 or a2) and (b1 or b2)".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynergyRule {
    pub name: String,
    pub fragments: Vec<String>,
    pub bonus: i64,
}

impl SynergyRule {
    pub fn new(name: &str, fragments: &[&str], bonus: i64) -> Self {
        Self {
            name: name.to_string(),
            fragments: fragments.iter().map(|f| f.to_string()).collect(),
            bonus,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ActivationKind {
    TapOnly,
    CheapManaTap,
    ExpensiveManaTap,
    Sacrifice,
    Discard,
}

impl ActivationKind {
    /// Regex signature matched against lower-cased rules text.
    pub fn signature(&self) -> &'static str {
        match self {
            // `{T}:` opening a line, no other cost in front of it
            Self::TapOnly => r"(?m)^\{t\}:",
            Self::CheapManaTap => r"\{[12]\},? ?\{t\}:",
            Self::ExpensiveManaTap => r"\{(?:[3-9]|\d{2,})\},? ?\{t\}:",
            Self::Sacrifice => r"sacrifice|пожертвуйте",
            Self::Discard => r"discard|сбросьте",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationCost {
    pub kind: ActivationKind,
    pub points: i64,
}

/// Uncompiled rule data, as shipped in `tables` or loaded from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleTables {
    pub keywords: Vec<WeightedRule>,
    pub triggers: Vec<WeightedRule>,
    pub effects: Vec<WeightedRule>,
    pub drawbacks: Vec<WeightedRule>,
    pub synergies: Vec<SynergyRule>,
    pub activation_costs: Vec<ActivationCost>,
    pub trigger_words: Vec<String>,
}

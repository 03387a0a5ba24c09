//! Built-in rule data.
//!
//! Card pages come in English and Russian, so most rules carry a phrase
//! for each. All phrases and patterns are written in lower case; the
//! scorer lower-cases rules text before matching.

use super::types::{ActivationCost, ActivationKind, RuleTables, SynergyRule, WeightedRule};

const KEYWORDS: &[(&str, i64)] = &[
    // English
    ("flying", 2),
    ("trample", 1),
    ("haste", 2),
    ("vigilance", 1),
    ("deathtouch", 2),
    ("lifelink", 2),
    ("first strike", 2),
    ("double strike", 4),
    ("hexproof", 2),
    ("indestructible", 3),
    ("menace", 1),
    ("reach", 1),
    ("flash", 1),
    ("prowess", 1),
    // Russian
    ("полет", 2),
    ("полёт", 2),
    ("пробивной удар", 1),
    ("ускорение", 2),
    ("бдительность", 1),
    ("смертельное касание", 2),
    ("цепь жизни", 2),
    ("первый удар", 2),
    ("двойной удар", 4),
    ("порчеустойчивость", 2),
    ("неразрушимость", 3),
    ("угроза", 1),
    ("захват", 1),
    ("миг", 1),
];

const TRIGGERS: &[(&str, i64)] = &[
    (r"whenever .{0,40}?attacks", 2),
    (r"whenever .{0,40}?deals combat damage", 3),
    (r"whenever you cast", 2),
    (r"whenever you gain life", 1),
    (r"when .{0,40}?enters", 2),
    (r"when .{0,40}?dies", 2),
    (r"at the beginning of (?:your|each) upkeep", 2),
    (r"at the beginning of (?:your|each) end step", 1),
    (r"всякий раз, когда .{0,40}?атакует", 2),
    (r"всякий раз, когда вы разыгрываете", 2),
    (r"когда .{0,40}?выходит на поле битвы", 2),
    (r"когда .{0,40}?умирает", 2),
    (r"в начале (?:вашего|каждого) шага поддержки", 2),
];

const EFFECTS: &[(&str, i64)] = &[
    (r"draw (?:a|an|one|two|three|four|x|\d+) cards?", 2),
    (r"destroy target", 3),
    (r"exile target", 3),
    (r"counter target spell", 3),
    (r"deals? (?:\d+|x) damage", 2),
    (r"gain (?:\d+|x) life", 1),
    (r"create .{0,40}?tokens?", 2),
    (r"\+1/\+1 counters?", 2),
    (r"return target .{0,40}?to (?:its|their) owner'?s'? hand", 2),
    (r"search your library", 2),
    (r"add \{[wubrgc]\}", 2),
    (r"tap target", 1),
    (r"возьмите (?:одну|две|три|\d+) карт", 2),
    (r"уничтожьте целев", 3),
    (r"изгоните целев", 3),
    (r"наносит (?:\d+|x) повреждени", 2),
    (r"создайте .{0,40}?фишк", 2),
];

const DRAWBACKS: &[(&str, i64)] = &[
    (r"can[’']t attack", -2),
    (r"can[’']t block", -1),
    (r"defender", -2),
    (r"doesn[’']t untap", -2),
    (r"enters (?:the battlefield )?tapped", -1),
    (r"you lose (?:\d+|x) life", -1),
    (r"sacrifice (?:it|this creature) at the beginning", -3),
    (r"не может атаковать", -2),
    (r"не может блокировать", -1),
    (r"защитник", -2),
    (r"не разворачивается", -2),
];

const SYNERGIES: &[(&str, &[&str], i64)] = &[
    (
        "evasive_drain",
        &["flying", "lifelink", "полет", "цепь жизни"],
        3,
    ),
    (
        "unblockable_kill",
        &["deathtouch", "first strike", "смертельное касание", "первый удар"],
        3,
    ),
    (
        "aggro",
        &["haste", "trample", "ускорение", "пробивной удар"],
        2,
    ),
    (
        "card_engine",
        &["draw", "whenever", "возьмите", "всякий раз"],
        2,
    ),
    (
        "aristocrats",
        &["sacrifice", "dies", "пожертвуйте", "умирает"],
        2,
    ),
    (
        "go_wide",
        &["create", "creatures you control get", "создайте", "существа под вашим контролем получают"],
        2,
    ),
];

const ACTIVATION_COSTS: &[(ActivationKind, i64)] = &[
    (ActivationKind::TapOnly, 3),
    (ActivationKind::CheapManaTap, 2),
    (ActivationKind::ExpensiveManaTap, 1),
    (ActivationKind::Sacrifice, 1),
    (ActivationKind::Discard, 1),
];

const TRIGGER_WORDS: &[&str] = &["whenever", "when", "at the beginning", "когда", "в начале"];

fn weighted(rows: &[(&str, i64)]) -> Vec<WeightedRule> {
    rows.iter()
        .map(|&(pattern, points)| WeightedRule::new(pattern, points))
        .collect()
}

pub fn builtin() -> RuleTables {
    RuleTables {
        keywords: weighted(KEYWORDS),
        triggers: weighted(TRIGGERS),
        effects: weighted(EFFECTS),
        drawbacks: weighted(DRAWBACKS),
        synergies: SYNERGIES
            .iter()
            .map(|&(name, fragments, bonus)| SynergyRule::new(name, fragments, bonus))
            .collect(),
        activation_costs: ACTIVATION_COSTS
            .iter()
            .map(|&(kind, points)| ActivationCost { kind, points })
            .collect(),
        trigger_words: TRIGGER_WORDS.iter().map(|w| w.to_string()).collect(),
    }
}

impl Default for RuleTables {
    fn default() -> Self {
        builtin()
    }
}

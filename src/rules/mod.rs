pub mod loader;
pub mod tables;
pub mod types;

pub use self::types::{ActivationCost, ActivationKind, RuleTables, SynergyRule, WeightedRule};

use crate::error::{ManaForgeError, MfResult};
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use strum::IntoEnumIterator;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub source: String,
    pub regex: Regex,
    pub points: i64,
}

#[derive(Debug, Clone)]
pub struct CompiledSignature {
    pub kind: ActivationKind,
    pub regex: Regex,
    pub points: i64,
}

/// Compiled, immutable rule tables. Built once and shared read-only
/// across every evaluation.
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Lower-cased keyword phrases, deduplicated, in table order.
    pub keywords: Vec<(String, i64)>,
    pub triggers: Vec<CompiledRule>,
    pub effects: Vec<CompiledRule>,
    pub drawbacks: Vec<CompiledRule>,
    pub signatures: Vec<CompiledSignature>,
    pub synergies: Vec<SynergyRule>,
    pub trigger_words: Vec<String>,
}

impl RuleSet {
    pub fn compile(tables: &RuleTables) -> MfResult<Self> {
        let mut keywords: Vec<(String, i64)> = Vec::with_capacity(tables.keywords.len());
        for rule in &tables.keywords {
            check_points("keyword", rule, false)?;
            let phrase = rule.pattern.trim().to_lowercase();
            if phrase.is_empty() {
                return Err(ManaForgeError::Validation(
                    "Keyword phrase must not be empty".to_string(),
                ));
            }
            if keywords.iter().any(|(k, _)| *k == phrase) {
                debug!("Duplicate keyword '{}' ignored", phrase);
                continue;
            }
            keywords.push((phrase, rule.points));
        }

        let triggers = compile_rules("trigger", &tables.triggers, false)?;
        let effects = compile_rules("effect", &tables.effects, false)?;
        let drawbacks = compile_rules("drawback", &tables.drawbacks, true)?;

        let costs: HashMap<ActivationKind, i64> = tables
            .activation_costs
            .iter()
            .map(|c| (c.kind, c.points))
            .collect();
        let mut signatures = Vec::new();
        for kind in ActivationKind::iter() {
            let points = costs.get(&kind).copied().unwrap_or(0);
            signatures.push(CompiledSignature {
                kind,
                regex: build_regex(kind.signature())?,
                points,
            });
        }

        for synergy in &tables.synergies {
            if synergy.fragments.len() < 2 {
                return Err(ManaForgeError::Validation(format!(
                    "Synergy '{}' needs at least 2 fragments, got {}",
                    synergy.name,
                    synergy.fragments.len()
                )));
            }
            if synergy.fragments.iter().any(|f| f.trim().is_empty()) {
                return Err(ManaForgeError::Validation(format!(
                    "Synergy '{}' has an empty fragment",
                    synergy.name
                )));
            }
        }
        let synergies = tables
            .synergies
            .iter()
            .map(|s| SynergyRule {
                name: s.name.clone(),
                fragments: s.fragments.iter().map(|f| f.to_lowercase()).collect(),
                bonus: s.bonus,
            })
            .collect();

        let trigger_words = tables
            .trigger_words
            .iter()
            .map(|w| w.to_lowercase())
            .filter(|w| !w.trim().is_empty())
            .collect();

        debug!(
            "Rule set compiled: {} keywords, {} triggers, {} effects, {} drawbacks",
            keywords.len(),
            triggers.len(),
            effects.len(),
            drawbacks.len()
        );

        Ok(Self {
            keywords,
            triggers,
            effects,
            drawbacks,
            signatures,
            synergies,
            trigger_words,
        })
    }

    pub fn builtin() -> MfResult<Self> {
        Self::compile(&RuleTables::default())
    }
}

fn build_regex(pattern: &str) -> MfResult<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| ManaForgeError::Regex {
            pattern: pattern.to_string(),
            source,
        })
}

fn check_points(table: &str, rule: &WeightedRule, negative: bool) -> MfResult<()> {
    let ok = if negative {
        rule.points <= 0
    } else {
        rule.points >= 0
    };
    if ok {
        Ok(())
    } else {
        Err(ManaForgeError::Validation(format!(
            "{} rule '{}' has points {} (expected {})",
            table,
            rule.pattern,
            rule.points,
            if negative { "<= 0" } else { ">= 0" }
        )))
    }
}

fn compile_rules(table: &str, rules: &[WeightedRule], negative: bool) -> MfResult<Vec<CompiledRule>> {
    rules
        .iter()
        .map(|rule| {
            check_points(table, rule, negative)?;
            // An empty regex matches every card.
            if rule.pattern.trim().is_empty() {
                return Err(ManaForgeError::Validation(format!(
                    "{} pattern must not be empty",
                    table
                )));
            }
            Ok(CompiledRule {
                source: rule.pattern.clone(),
                regex: build_regex(&rule.pattern)?,
                points: rule.points,
            })
        })
        .collect()
}

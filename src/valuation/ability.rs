use crate::config::ScoringParams;
use crate::rules::RuleSet;
use serde::Serialize;
use std::collections::HashSet;
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Pass {
    Keyword,
    Trigger,
    Effect,
    Activated,
    Synergy,
    Drawback,
}

/// One rule that contributed to a card's ability score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleHit {
    pub pass: Pass,
    pub rule: String,
    /// Raw match count before any cap.
    pub matches: usize,
    pub points: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct AbilityBreakdown {
    pub keywords: i64,
    pub triggers: i64,
    pub effects: i64,
    pub activated: i64,
    pub synergy: i64,
    /// Zero or negative.
    pub drawbacks: i64,
    pub raw_total: i64,
    /// `raw_total` clamped at zero.
    pub total: u64,
    pub hits: Vec<RuleHit>,
}

/// Turns rules text into ability points by running six passes over the
/// lower-cased text.
#[derive(Debug, Clone)]
pub struct AbilityScorer {
    pub rules: RuleSet,
    pub params: ScoringParams,
}

impl AbilityScorer {
    pub fn new(rules: RuleSet, params: ScoringParams) -> Self {
        Self { rules, params }
    }

    pub fn score(&self, rules_text: &str) -> u64 {
        self.breakdown(rules_text).total
    }

    pub fn breakdown(&self, rules_text: &str) -> AbilityBreakdown {
        let mut d = AbilityBreakdown::default();
        if rules_text.trim().is_empty() {
            return d;
        }

        let text = rules_text.to_lowercase();
        let hits = &mut d.hits;

        d.keywords = keyword_pass(&self.rules, &text, hits);
        d.triggers = trigger_pass(&self.rules, &text, self.params.trigger_cap, hits);
        d.effects = effect_pass(&self.rules, &text, hits);
        d.activated = activated_pass(&self.rules, &text, self.params.activation_cap, hits);
        d.synergy = synergy_pass(&self.rules, &text, &self.params, hits);
        d.drawbacks = drawback_pass(&self.rules, &text, hits);

        d.raw_total = d
            .keywords
            .saturating_add(d.triggers)
            .saturating_add(d.effects)
            .saturating_add(d.activated)
            .saturating_add(d.synergy)
            .saturating_add(d.drawbacks);
        d.total = d.raw_total.max(0) as u64;
        d
    }
}

fn capped(count: usize, cap: u32) -> i64 {
    count.min(cap as usize) as i64
}

/// Each keyword is credited at most once, however often it appears.
pub fn keyword_pass(rules: &RuleSet, text: &str, hits: &mut Vec<RuleHit>) -> i64 {
    let mut credited: HashSet<&str> = HashSet::new();
    let mut sum = 0i64;
    for (keyword, points) in &rules.keywords {
        if text.contains(keyword.as_str()) && credited.insert(keyword.as_str()) {
            sum = sum.saturating_add(*points);
            hits.push(RuleHit {
                pass: Pass::Keyword,
                rule: keyword.clone(),
                matches: text.matches(keyword.as_str()).count(),
                points: *points,
            });
        }
    }
    sum
}

/// Points per match, up to `cap` matches per pattern.
pub fn trigger_pass(rules: &RuleSet, text: &str, cap: u32, hits: &mut Vec<RuleHit>) -> i64 {
    let mut sum = 0i64;
    for rule in &rules.triggers {
        let count = rule.regex.find_iter(text).count();
        if count == 0 {
            continue;
        }
        let points = rule.points.saturating_mul(capped(count, cap));
        sum = sum.saturating_add(points);
        hits.push(RuleHit {
            pass: Pass::Trigger,
            rule: rule.source.clone(),
            matches: count,
            points,
        });
    }
    sum
}

/// Presence only: a matching pattern adds its points once.
pub fn effect_pass(rules: &RuleSet, text: &str, hits: &mut Vec<RuleHit>) -> i64 {
    presence_pass(Pass::Effect, &rules.effects, text, hits)
}

pub fn drawback_pass(rules: &RuleSet, text: &str, hits: &mut Vec<RuleHit>) -> i64 {
    presence_pass(Pass::Drawback, &rules.drawbacks, text, hits)
}

fn presence_pass(
    pass: Pass,
    table: &[crate::rules::CompiledRule],
    text: &str,
    hits: &mut Vec<RuleHit>,
) -> i64 {
    let mut sum = 0i64;
    for rule in table {
        if rule.regex.is_match(text) {
            sum = sum.saturating_add(rule.points);
            hits.push(RuleHit {
                pass,
                rule: rule.source.clone(),
                matches: rule.regex.find_iter(text).count(),
                points: rule.points,
            });
        }
    }
    sum
}

pub fn activated_pass(rules: &RuleSet, text: &str, cap: u32, hits: &mut Vec<RuleHit>) -> i64 {
    let mut sum = 0i64;
    for sig in &rules.signatures {
        let count = sig.regex.find_iter(text).count();
        if count == 0 {
            continue;
        }
        let points = sig.points.saturating_mul(capped(count, cap));
        sum = sum.saturating_add(points);
        hits.push(RuleHit {
            pass: Pass::Activated,
            rule: sig.kind.to_string(),
            matches: count,
            points,
        });
    }
    sum
}

pub fn synergy_pass(
    rules: &RuleSet,
    text: &str,
    params: &ScoringParams,
    hits: &mut Vec<RuleHit>,
) -> i64 {
    let mut sum = 0i64;
    for synergy in &rules.synergies {
        if synergy_fires(&synergy.fragments, text) {
            sum = sum.saturating_add(synergy.bonus);
            hits.push(RuleHit {
                pass: Pass::Synergy,
                rule: synergy.name.clone(),
                matches: 1,
                points: synergy.bonus,
            });
        }
    }

    let words = count_trigger_words(&rules.trigger_words, text);
    if words >= params.trigger_word_threshold as usize {
        sum = sum.saturating_add(params.trigger_word_bonus);
        hits.push(RuleHit {
            pass: Pass::Synergy,
            rule: "trigger_words".to_string(),
            matches: words,
            points: params.trigger_word_bonus,
        });
    }
    sum
}

/// Stride-group check: for every `i < len / 2`, at least one of
/// `fragments[i], fragments[i + half], ...` must occur in `text`.
pub fn synergy_fires(fragments: &[String], text: &str) -> bool {
    let half = fragments.len() / 2;
    if half == 0 {
        // RuleSet::compile rejects these; never fire on a hand-built set.
        return false;
    }
    (0..half).all(|i| {
        fragments
            .iter()
            .skip(i)
            .step_by(half)
            .any(|f| text.contains(f.as_str()))
    })
}

/// Substring occurrences, so "whenever" also counts as a "when". With the
/// built-in words a single "whenever" counts twice, and two "whenever"
/// clauses already reach the default threshold of 3.
pub fn count_trigger_words(words: &[String], text: &str) -> usize {
    words.iter().map(|w| text.matches(w.as_str()).count()).sum()
}

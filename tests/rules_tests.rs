use manaforge::config::ScoringParams;
use manaforge::error::ManaForgeError;
use manaforge::rules::loader::{load_rule_tables, resolve_rule_set};
use manaforge::rules::{ActivationKind, RuleSet, RuleTables, SynergyRule, WeightedRule};
use manaforge::valuation::AbilityScorer;
use rstest::rstest;
use std::io::Cursor;
use std::str::FromStr;
use strum::IntoEnumIterator;

fn empty_tables() -> RuleTables {
    RuleTables {
        keywords: vec![],
        triggers: vec![],
        effects: vec![],
        drawbacks: vec![],
        synergies: vec![],
        activation_costs: vec![],
        trigger_words: vec![],
    }
}

#[test]
fn test_builtin_tables_compile() {
    let rules = RuleSet::builtin().unwrap();
    assert!(!rules.keywords.is_empty());
    assert!(!rules.triggers.is_empty());
    assert!(!rules.effects.is_empty());
    assert!(!rules.drawbacks.is_empty());
    assert_eq!(rules.signatures.len(), ActivationKind::iter().count());
    assert!(rules.drawbacks.iter().all(|r| r.points <= 0));
}

#[test]
fn test_invalid_pattern_is_reported() {
    let mut tables = empty_tables();
    tables.effects.push(WeightedRule::new("draw (a card", 2));
    match RuleSet::compile(&tables) {
        Err(ManaForgeError::Regex { pattern, .. }) => assert_eq!(pattern, "draw (a card"),
        other => panic!("expected regex error, got {:?}", other),
    }
}

#[test]
fn test_single_fragment_synergy_rejected() {
    let mut tables = empty_tables();
    tables.synergies.push(SynergyRule::new("solo", &["flying"], 3));
    assert!(matches!(
        RuleSet::compile(&tables),
        Err(ManaForgeError::Validation(_))
    ));
}

#[test]
fn test_point_signs_validated() {
    let mut tables = empty_tables();
    tables.drawbacks.push(WeightedRule::new("defender", 2));
    assert!(matches!(
        RuleSet::compile(&tables),
        Err(ManaForgeError::Validation(_))
    ));

    let mut tables = empty_tables();
    tables.keywords.push(WeightedRule::new("flying", -1));
    assert!(matches!(
        RuleSet::compile(&tables),
        Err(ManaForgeError::Validation(_))
    ));
}

#[test]
fn test_duplicate_keywords_credited_once() {
    let mut tables = empty_tables();
    tables.keywords.push(WeightedRule::new("flying", 2));
    tables.keywords.push(WeightedRule::new("Flying", 5));
    let rules = RuleSet::compile(&tables).unwrap();
    assert_eq!(rules.keywords, vec![("flying".to_string(), 2)]);

    let scorer = AbilityScorer::new(rules, ScoringParams::default());
    assert_eq!(scorer.score("flying flying"), 2);
}

#[test]
fn test_missing_activation_cost_scores_zero() {
    let rules = RuleSet::compile(&empty_tables()).unwrap();
    assert!(rules.signatures.iter().all(|s| s.points == 0));
    let scorer = AbilityScorer::new(rules, ScoringParams::default());
    assert_eq!(scorer.breakdown("{T}: Add {G}.").activated, 0);
}

#[test]
fn test_partial_json_takes_builtin_defaults() {
    let json = r#"{ "keywords": [ { "pattern": "banding", "points": 7 } ] }"#;
    let tables = load_rule_tables(Cursor::new(json)).unwrap();
    assert_eq!(tables.keywords, vec![WeightedRule::new("banding", 7)]);
    assert_eq!(tables.triggers, RuleTables::default().triggers);

    let scorer = AbilityScorer::new(RuleSet::compile(&tables).unwrap(), ScoringParams::default());
    assert_eq!(scorer.breakdown("Banding").keywords, 7);
    assert_eq!(scorer.breakdown("Flying").keywords, 0);
}

#[test]
fn test_rule_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.json");
    std::fs::write(&path, RuleTables::default().to_json_pretty().unwrap()).unwrap();

    assert_eq!(
        RuleTables::load_from_file(&path).unwrap(),
        RuleTables::default()
    );
    let rules = resolve_rule_set(Some(&path)).unwrap();
    assert_eq!(rules.keywords, RuleSet::builtin().unwrap().keywords);

    assert!(matches!(
        resolve_rule_set(Some(dir.path().join("missing.json"))),
        Err(ManaForgeError::Io(_))
    ));
}

#[test]
fn test_activation_kind_names() {
    assert_eq!(ActivationKind::TapOnly.to_string(), "tap_only");
    assert_eq!(
        ActivationKind::from_str("expensive_mana_tap").unwrap(),
        ActivationKind::ExpensiveManaTap
    );
    let json = serde_json::to_string(&ActivationKind::CheapManaTap).unwrap();
    assert_eq!(json, "\"cheap_mana_tap\"");
}

#[rstest]
#[case::empty("")]
#[case::whitespace("   ")]
fn test_blank_patterns_rejected(#[case] pattern: &str) {
    for table in 0..3 {
        let mut tables = empty_tables();
        let rule = WeightedRule::new(pattern, if table == 2 { -1 } else { 4 });
        match table {
            0 => tables.triggers.push(rule),
            1 => tables.effects.push(rule),
            _ => tables.drawbacks.push(rule),
        }
        assert!(matches!(
            RuleSet::compile(&tables),
            Err(ManaForgeError::Validation(_))
        ));
    }
}

#[test]
fn test_blank_synergy_fragment_rejected() {
    let mut tables = RuleTables::default();
    tables.synergies.push(SynergyRule::new("blank", &["", "zzz"], 5));
    assert!(matches!(
        RuleSet::compile(&tables),
        Err(ManaForgeError::Validation(_))
    ));

    let mut tables = RuleTables::default();
    tables.synergies.push(SynergyRule::new("blank", &["flying", " "], 5));
    assert!(matches!(
        RuleSet::compile(&tables),
        Err(ManaForgeError::Validation(_))
    ));
}

#[test]
fn test_blank_trigger_words_dropped() {
    let mut tables = empty_tables();
    tables.trigger_words = vec!["".to_string(), " ".to_string(), "when".to_string()];
    let rules = RuleSet::compile(&tables).unwrap();
    assert_eq!(rules.trigger_words, vec!["when".to_string()]);

    let scorer = AbilityScorer::new(rules, ScoringParams::default());
    assert_eq!(scorer.breakdown("Vanilla.").total, 0);
}

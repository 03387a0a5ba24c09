use manaforge::config::{Config, ManaFormula, ScoringParams};
use manaforge::error::ManaForgeError;

#[test]
fn test_default_params() {
    let p = ScoringParams::default();
    assert_eq!(p.trigger_cap, 3);
    assert_eq!(p.activation_cap, 2);
    assert_eq!(p.trigger_word_threshold, 3);
    assert_eq!(p.trigger_word_bonus, 3);
    assert_eq!(p.pt_multiplier, 2);
}

#[test]
fn test_formula_table_parsing_defaults() {
    let f = ManaFormula::default();
    assert_eq!(f.get_generic_table().unwrap(), vec![0, 1, 2, 3, 5, 8, 11]);
    assert_eq!(f.get_colored_table().unwrap(), vec![2, 5, 11]);
}

#[test]
fn test_formula_table_parsing_tolerates_spaces() {
    let f = ManaFormula {
        generic_table: " 0, 1 ,2 ".to_string(),
        ..Default::default()
    };
    assert_eq!(f.get_generic_table().unwrap(), vec![0, 1, 2]);
}

#[test]
fn test_formula_table_garbage_is_config_error() {
    let f = ManaFormula {
        colored_table: "2, five, 11".to_string(),
        ..Default::default()
    };
    match f.get_colored_table() {
        Err(ManaForgeError::Config(msg)) => assert!(msg.contains("five")),
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn test_formula_table_empty_is_config_error() {
    let f = ManaFormula {
        generic_table: " , ".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        f.get_generic_table(),
        Err(ManaForgeError::Config(_))
    ));
}

#[test]
fn test_partial_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "params": { "trigger_cap": 5 } }"#).unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.params.trigger_cap, 5);
    assert_eq!(config.params.activation_cap, 2);
    assert_eq!(config.formula, ManaFormula::default());
}

#[test]
fn test_params_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("params.json");
    std::fs::write(&path, r#"{ "pt_multiplier": 4 }"#).unwrap();

    let params = ScoringParams::load_from_file(&path).unwrap();
    assert_eq!(params.pt_multiplier, 4);
    assert_eq!(params.trigger_cap, 3);
}

#[test]
fn test_bad_config_file_is_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(ManaForgeError::Json(_))
    ));
}

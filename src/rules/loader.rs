use super::types::RuleTables;
use super::RuleSet;
use crate::error::MfResult;
use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

pub fn load_rule_tables<R: Read>(reader: R) -> MfResult<RuleTables> {
    Ok(serde_json::from_reader(reader)?)
}

impl RuleTables {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> MfResult<Self> {
        let file = fs::File::open(path.as_ref())?;
        let tables = load_rule_tables(BufReader::new(file))?;
        info!(
            "📜 Loaded rule tables from {:?}: {} keywords, {} triggers, {} effects, {} drawbacks, {} synergies",
            path.as_ref(),
            tables.keywords.len(),
            tables.triggers.len(),
            tables.effects.len(),
            tables.drawbacks.len(),
            tables.synergies.len()
        );
        Ok(tables)
    }

    pub fn to_json_pretty(&self) -> MfResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Compiles the rule file at `path`, or the built-in tables when `None`.
pub fn resolve_rule_set<P: AsRef<Path>>(path: Option<P>) -> MfResult<RuleSet> {
    match path {
        Some(p) => RuleSet::compile(&RuleTables::load_from_file(p)?),
        None => {
            info!("📜 Using built-in rule tables");
            RuleSet::builtin()
        }
    }
}

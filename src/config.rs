use crate::error::{ManaForgeError, MfResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    #[serde(default)]
    pub params: ScoringParams,
    #[command(flatten)]
    #[serde(default)]
    pub formula: ManaFormula,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> MfResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overwrites fields with values the user typed on the command line,
    /// leaving file-provided values for everything left at its default.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident, $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(params, trigger_cap);
        update_if_present!(params, activation_cap);
        update_if_present!(params, trigger_word_threshold);
        update_if_present!(params, trigger_word_bonus);
        update_if_present!(params, pt_multiplier);

        update_if_present!(formula, generic_table);
        update_if_present!(formula, generic_linear_base);
        update_if_present!(formula, generic_linear_step);
        update_if_present!(formula, colored_table);
        update_if_present!(formula, colored_linear_base);
        update_if_present!(formula, colored_linear_step);
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    // === TRIGGERS ===
    /// Max occurrences of one trigger pattern that still add points
    #[arg(long, default_value_t = 3)]
    pub trigger_cap: u32,

    // === ACTIVATED ABILITIES ===
    #[arg(long, default_value_t = 2)]
    pub activation_cap: u32,

    // === SYNERGY ===
    /// Trigger words needed before the flat bonus applies
    #[arg(long, default_value_t = 3)]
    pub trigger_word_threshold: u32,
    #[arg(long, default_value_t = 3)]
    pub trigger_word_bonus: i64,

    // === POWER / TOUGHNESS ===
    #[arg(long, default_value_t = 2)]
    pub pt_multiplier: u64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            trigger_cap: 3,
            activation_cap: 2,
            trigger_word_threshold: 3,
            trigger_word_bonus: 3,
            pt_multiplier: 2,
        }
    }
}

impl ScoringParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> MfResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Piecewise cost curves for the mana valuator.
///
/// The generic table covers amounts `0..len`; past the last entry the
/// curve continues linearly from that entry's index. The colored table
/// covers pip counts `1..=len` (zero pips are free) and continues linearly
/// from `len`.
#[derive(Args, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManaFormula {
    #[arg(long, default_value = "0,1,2,3,5,8,11")]
    pub generic_table: String,
    #[arg(long, default_value_t = 11)]
    pub generic_linear_base: u64,
    #[arg(long, default_value_t = 3)]
    pub generic_linear_step: u64,

    #[arg(long, default_value = "2,5,11")]
    pub colored_table: String,
    #[arg(long, default_value_t = 11)]
    pub colored_linear_base: u64,
    #[arg(long, default_value_t = 6)]
    pub colored_linear_step: u64,
}

impl Default for ManaFormula {
    fn default() -> Self {
        Self {
            generic_table: "0,1,2,3,5,8,11".to_string(),
            generic_linear_base: 11,
            generic_linear_step: 3,
            colored_table: "2,5,11".to_string(),
            colored_linear_base: 11,
            colored_linear_step: 6,
        }
    }
}

impl ManaFormula {
    pub fn get_generic_table(&self) -> MfResult<Vec<u64>> {
        parse_u64_list(&self.generic_table, "generic_table")
    }

    pub fn get_colored_table(&self) -> MfResult<Vec<u64>> {
        parse_u64_list(&self.colored_table, "colored_table")
    }
}

fn parse_u64_list(s: &str, name: &str) -> MfResult<Vec<u64>> {
    let values = s
        .split(',')
        .filter(|p| !p.trim().is_empty())
        .map(|p| {
            p.trim().parse::<u64>().map_err(|_| {
                ManaForgeError::Config(format!("Invalid number '{}' in --{}", p.trim(), name))
            })
        })
        .collect::<MfResult<Vec<u64>>>()?;

    if values.is_empty() {
        return Err(ManaForgeError::Config(format!(
            "--{} requires at least one value",
            name
        )));
    }
    Ok(values)
}

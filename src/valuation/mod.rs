pub mod ability;
pub mod mana;
pub mod pt;

pub use self::ability::{AbilityBreakdown, AbilityScorer, Pass, RuleHit};
pub use self::mana::{ManaBreakdown, ManaValuator};
pub use self::pt::PtValuator;

use crate::card::{CardRecord, ScoredCard};
use crate::config::Config;
use crate::error::MfResult;
use crate::rules::RuleSet;
use rayon::prelude::*;
use serde::Serialize;

/// Scores plus the per-pass detail behind them.
#[derive(Debug, Clone, Serialize)]
pub struct CardReport {
    pub scored: ScoredCard,
    #[serde(skip)]
    pub mana: ManaBreakdown,
    pub ability: AbilityBreakdown,
}

/// Composes the three valuators. Holds no mutable state, so one instance
/// can be shared across threads.
#[derive(Debug, Clone)]
pub struct CardValuator {
    pub mana: ManaValuator,
    pub pt: PtValuator,
    pub ability: AbilityScorer,
}

impl CardValuator {
    pub fn new(rules: RuleSet, config: &Config) -> MfResult<Self> {
        Ok(Self {
            mana: ManaValuator::new(&config.formula)?,
            pt: PtValuator::new(config.params.pt_multiplier),
            ability: AbilityScorer::new(rules, config.params.clone()),
        })
    }

    pub fn with_defaults() -> MfResult<Self> {
        Self::new(RuleSet::builtin()?, &Config::default())
    }

    pub fn evaluate(&self, card: &CardRecord) -> ScoredCard {
        ScoredCard::new(
            card.clone(),
            self.mana.value(&card.mana_cost),
            self.pt.value(&card.power_toughness),
            self.ability.score(&card.rules_text),
        )
    }

    /// Parallel over cards; output order matches input order.
    pub fn evaluate_batch(&self, cards: &[CardRecord]) -> Vec<ScoredCard> {
        cards.par_iter().map(|c| self.evaluate(c)).collect()
    }

    pub fn explain(&self, card: &CardRecord) -> CardReport {
        let mana = self.mana.analyze(&card.mana_cost);
        let ability = self.ability.breakdown(&card.rules_text);
        let scored = ScoredCard::new(
            card.clone(),
            mana.total,
            self.pt.value(&card.power_toughness),
            ability.total,
        );
        CardReport {
            scored,
            mana,
            ability,
        }
    }
}

use crate::config::ManaFormula;
use crate::error::{ManaForgeError, MfResult};
use regex::Regex;
use tracing::debug;

const COLOR_SYMBOLS: [char; 5] = ['W', 'U', 'B', 'R', 'G'];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ManaBreakdown {
    /// Sum of all numeric symbols, e.g. `{3}` adds 3.
    pub generic_amount: u64,
    pub colored_pips: u64,
    /// Hybrid, split and unknown symbols. They add nothing.
    pub ignored_symbols: Vec<String>,
    pub generic_points: u64,
    pub colored_points: u64,
    pub total: u64,
}

#[derive(Debug, Clone)]
pub struct ManaValuator {
    symbol_re: Regex,
    generic_table: Vec<u64>,
    generic_linear_base: u64,
    generic_linear_step: u64,
    colored_table: Vec<u64>,
    colored_linear_base: u64,
    colored_linear_step: u64,
}

impl ManaValuator {
    pub fn new(formula: &ManaFormula) -> MfResult<Self> {
        let pattern = r"\{(.*?)\}";
        let symbol_re = Regex::new(pattern).map_err(|source| ManaForgeError::Regex {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            symbol_re,
            generic_table: formula.get_generic_table()?,
            generic_linear_base: formula.generic_linear_base,
            generic_linear_step: formula.generic_linear_step,
            colored_table: formula.get_colored_table()?,
            colored_linear_base: formula.colored_linear_base,
            colored_linear_step: formula.colored_linear_step,
        })
    }

    pub fn value(&self, mana_cost: &str) -> u64 {
        self.analyze(mana_cost).total
    }

    pub fn analyze(&self, mana_cost: &str) -> ManaBreakdown {
        let mut b = ManaBreakdown::default();

        for caps in self.symbol_re.captures_iter(mana_cost) {
            let sym = &caps[1];
            if sym.contains('/') {
                debug!("Hybrid mana symbol {{{}}} ignored", sym);
                b.ignored_symbols.push(sym.to_string());
            } else if !sym.is_empty() && sym.bytes().all(|c| c.is_ascii_digit()) {
                // All digits, so a parse failure can only be overflow.
                let n = sym.parse::<u64>().unwrap_or_else(|_| {
                    debug!("Generic mana symbol {{{}}} out of range, saturated", sym);
                    u64::MAX
                });
                b.generic_amount = b.generic_amount.saturating_add(n);
            } else if is_colored(sym) {
                b.colored_pips += 1;
            } else {
                debug!("Unrecognized mana symbol {{{}}} ignored", sym);
                b.ignored_symbols.push(sym.to_string());
            }
        }

        // Colored pips also push the cost into a higher generic bracket.
        b.generic_points = self.generic_points(b.generic_amount.saturating_add(b.colored_pips));
        b.colored_points = self.colored_points(b.colored_pips);
        b.total = b.generic_points.saturating_add(b.colored_points);
        b
    }

    pub fn generic_points(&self, amount: u64) -> u64 {
        let last = (self.generic_table.len() - 1) as u64;
        if amount <= last {
            return self.generic_table[amount as usize];
        }
        self.generic_linear_base
            .saturating_add(self.generic_linear_step.saturating_mul(amount - last))
    }

    pub fn colored_points(&self, pips: u64) -> u64 {
        if pips == 0 {
            return 0;
        }
        let len = self.colored_table.len() as u64;
        if pips <= len {
            return self.colored_table[(pips - 1) as usize];
        }
        self.colored_linear_base
            .saturating_add(self.colored_linear_step.saturating_mul(pips - len))
    }
}

fn is_colored(sym: &str) -> bool {
    let mut chars = sym.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => COLOR_SYMBOLS.contains(&c.to_ascii_uppercase()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colored_symbol_detection() {
        assert!(is_colored("W"));
        assert!(is_colored("g"));
        assert!(!is_colored("C"));
        assert!(!is_colored("WU"));
        assert!(!is_colored(""));
    }
}

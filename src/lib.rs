pub mod card;
pub mod config;
pub mod error;
pub mod rules;
pub mod sink;
pub mod source;
pub mod valuation;
// cmd and reports are binary modules (declared in main.rs).

pub use self::card::{CardRecord, ScoredCard};
pub use self::valuation::CardValuator;

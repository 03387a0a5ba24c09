use crate::reports;
use clap::Args;
use manaforge::config::Config;
use manaforge::{CardRecord, CardValuator};

#[derive(Args, Debug, Clone)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub config: Config,

    /// Rules text to score
    #[arg(short, long, default_value = "")]
    pub text: String,

    #[arg(short, long, default_value = "")]
    pub mana: String,

    #[arg(short, long, default_value = "0/0")]
    pub pt: String,

    #[arg(short, long, default_value = "")]
    pub name: String,
}

pub fn run(args: ExplainArgs, valuator: &CardValuator) {
    let card = CardRecord::new(args.name, args.mana, args.text, args.pt, "");
    let report = valuator.explain(&card);
    reports::print_card_report(&report);
}

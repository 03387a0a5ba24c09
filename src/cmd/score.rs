use crate::reports;
use clap::Args;
use manaforge::config::Config;
use manaforge::error::MfResult;
use manaforge::sink::{self, CsvSink, JsonSink, ScoreSink};
use manaforge::source::load_cards_from_file;
use manaforge::CardValuator;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    /// Card records (.csv or .json)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file (.csv or .json)
    #[arg(short, long, default_value = "results/scored.csv")]
    pub output: PathBuf,

    /// Write total_power and balance as spreadsheet formulas (CSV only)
    #[arg(long, default_value_t = false)]
    pub formulas: bool,

    /// Skip the console summary table
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

pub fn run(args: ScoreArgs, valuator: &CardValuator) -> MfResult<()> {
    let cards = load_cards_from_file(&args.input)?;
    if cards.is_empty() {
        warn!("⚠️  No cards loaded from {:?}. Nothing to export.", args.input);
        return Ok(());
    }

    info!("🚀 Scoring {} cards...", cards.len());
    let start = Instant::now();
    let scored = valuator.evaluate_batch(&cards);
    info!("   Done in {:.2?}", start.elapsed());

    let is_json = args
        .output
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let mut out: Box<dyn ScoreSink> = if is_json {
        if args.formulas {
            warn!("⚠️  --formulas only applies to CSV output; ignored.");
        }
        if let Some(parent) = args.output.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Box::new(JsonSink::new(BufWriter::new(File::create(&args.output)?)))
    } else {
        Box::new(CsvSink::create(&args.output, args.formulas)?)
    };
    sink::write_all(out.as_mut(), &scored)?;
    info!("💾 Saved: {:?}", args.output);

    if !args.quiet {
        reports::print_card_summary(&scored);
    }
    Ok(())
}

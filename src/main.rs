use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use manaforge::config::Config;
use manaforge::rules::loader::resolve_rule_set;
use manaforge::CardValuator;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Rule tables JSON (see `manaforge rules`); built-in tables when omitted
    #[arg(global = true, short, long)]
    rules: Option<String>,

    /// Scoring parameters JSON; flags given on the command line still win
    #[arg(global = true, short = 'c', long = "config")]
    config_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Score(cmd::score::ScoreArgs),
    Explain(cmd::explain::ExplainArgs),
    /// Print the built-in rule tables as JSON
    Rules,
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let (cli_config, sub_name) = match &cli.command {
        Commands::Score(args) => (args.config.clone(), "score"),
        Commands::Explain(args) => (args.config.clone(), "explain"),
        Commands::Rules => {
            if let Err(e) = cmd::rules::run() {
                error!("❌ {}", e);
                process::exit(1);
            }
            return;
        }
    };

    let config = match &cli.config_file {
        Some(path) => {
            info!("⚖️  Loading scoring parameters from: {}", path);
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ Failed to load config '{}': {}", path, e);
                process::exit(1);
            });
            if let Some(sub_matches) = matches.subcommand_matches(sub_name) {
                file_config.merge_from_cli(&cli_config, sub_matches);
            }
            file_config
        }
        None => cli_config,
    };

    let valuator = match resolve_rule_set(cli.rules.as_ref())
        .and_then(|rules| CardValuator::new(rules, &config))
    {
        Ok(v) => v,
        Err(e) => {
            error!("❌ FATAL ERROR INITIALIZING VALUATOR:");
            error!("   {}", e);
            process::exit(1);
        }
    };

    match cli.command {
        Commands::Score(args) => {
            if let Err(e) = cmd::score::run(args, &valuator) {
                error!("❌ {}", e);
                process::exit(1);
            }
            println!("\n✨ Done!");
        }
        Commands::Explain(args) => cmd::explain::run(args, &valuator),
        Commands::Rules => {}
    }
}

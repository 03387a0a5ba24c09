use manaforge::error::MfResult;
use manaforge::rules::RuleTables;

/// Prints the built-in tables as JSON, ready to edit and pass back via `--rules`.
pub fn run() -> MfResult<()> {
    println!("{}", RuleTables::default().to_json_pretty()?);
    Ok(())
}

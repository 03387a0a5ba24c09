//! Card input. Records arrive already extracted from card pages; this
//! module only reads them from CSV or JSON.

use crate::card::CardRecord;
use crate::error::MfResult;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

/// Reads `name,mana_cost,rules_text,power_toughness,source_url` rows.
/// Missing columns take the extractor defaults; unreadable rows are skipped.
pub fn load_cards_csv<R: Read>(reader: R) -> MfResult<Vec<CardRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut cards = Vec::new();
    let mut skipped = 0;

    for (row_idx, result) in rdr.deserialize::<CardRecord>().enumerate() {
        match result {
            Ok(card) => cards.push(card.normalized()),
            Err(e) => {
                skipped += 1;
                warn!("⚠️  [Row {}] CSV Parse Error: {}", row_idx + 1, e);
            }
        }
    }

    if skipped > 0 {
        warn!("⚠️  Skipped {} invalid card rows.", skipped);
    }
    Ok(cards)
}

/// Reads a JSON array of card objects.
pub fn load_cards_json<R: Read>(reader: R) -> MfResult<Vec<CardRecord>> {
    let cards: Vec<CardRecord> = serde_json::from_reader(reader)?;
    Ok(cards.into_iter().map(CardRecord::normalized).collect())
}

/// Picks the format from the extension: `.json` is JSON, anything else CSV.
pub fn load_cards_from_file<P: AsRef<Path>>(path: P) -> MfResult<Vec<CardRecord>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let cards = if is_json {
        load_cards_json(BufReader::new(file))?
    } else {
        load_cards_csv(file)?
    };
    info!("📥 Loaded {} cards from {:?}", cards.len(), path);
    Ok(cards)
}

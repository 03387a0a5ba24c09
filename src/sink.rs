//! Scored-card output.

use crate::card::ScoredCard;
use crate::error::{ManaForgeError, MfResult};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

pub const COLUMNS: [&str; 10] = [
    "name",
    "mana_cost",
    "rules_text",
    "power_toughness",
    "source_url",
    "mana_points",
    "pt_points",
    "ability_points",
    "total_power",
    "balance",
];

/// Receives each scored card for persistence.
pub trait ScoreSink {
    fn accept(&mut self, scored: &ScoredCard) -> MfResult<()>;

    fn finish(&mut self) -> MfResult<()> {
        Ok(())
    }
}

impl ScoreSink for Vec<ScoredCard> {
    fn accept(&mut self, scored: &ScoredCard) -> MfResult<()> {
        self.push(scored.clone());
        Ok(())
    }
}

/// Feeds every card to `sink`, then finishes it.
pub fn write_all<S: ScoreSink + ?Sized>(sink: &mut S, cards: &[ScoredCard]) -> MfResult<()> {
    for card in cards {
        sink.accept(card)?;
    }
    sink.finish()
}

/// CSV in the fixed column order. With `formulas` set, `total_power` and
/// `balance` are written as spreadsheet formulas over columns F, G and I.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    formulas: bool,
    rows: usize,
}

impl<W: Write> CsvSink<W> {
    pub fn new(inner: W, formulas: bool) -> MfResult<Self> {
        let mut writer = csv::Writer::from_writer(inner);
        writer.write_record(COLUMNS)?;
        Ok(Self {
            writer,
            formulas,
            rows: 0,
        })
    }

    pub fn rows_written(&self) -> usize {
        self.rows
    }

    pub fn into_inner(self) -> MfResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| ManaForgeError::Io(e.into_error()))
    }
}

impl CsvSink<File> {
    pub fn create<P: AsRef<Path>>(path: P, formulas: bool) -> MfResult<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Self::new(File::create(path)?, formulas)
    }
}

impl<W: Write> ScoreSink for CsvSink<W> {
    fn accept(&mut self, s: &ScoredCard) -> MfResult<()> {
        // 1-based, after the header row
        let row = self.rows + 2;
        let (total_power, balance) = if self.formulas {
            (format!("=F{row}+G{row}"), format!("=I{row}-F{row}"))
        } else {
            (s.total_power.to_string(), s.balance.to_string())
        };

        let mana_points = s.mana_points.to_string();
        let pt_points = s.pt_points.to_string();
        let ability_points = s.ability_points.to_string();

        self.writer.write_record([
            s.card.name.as_str(),
            s.card.mana_cost.as_str(),
            s.card.rules_text.as_str(),
            s.card.power_toughness.as_str(),
            s.card.source_url.as_str(),
            mana_points.as_str(),
            pt_points.as_str(),
            ability_points.as_str(),
            total_power.as_str(),
            balance.as_str(),
        ])?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> MfResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Buffers cards and writes one pretty-printed JSON array on `finish`.
pub struct JsonSink<W: Write> {
    inner: W,
    cards: Vec<ScoredCard>,
}

impl<W: Write> JsonSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            cards: Vec::new(),
        }
    }
}

impl<W: Write> ScoreSink for JsonSink<W> {
    fn accept(&mut self, scored: &ScoredCard) -> MfResult<()> {
        self.cards.push(scored.clone());
        Ok(())
    }

    fn finish(&mut self) -> MfResult<()> {
        serde_json::to_writer_pretty(&mut self.inner, &self.cards)?;
        writeln!(self.inner)?;
        self.inner.flush()?;
        Ok(())
    }
}

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use manaforge::valuation::CardReport;
use manaforge::ScoredCard;

/// One row per card, in input order.
pub fn print_card_summary(cards: &[ScoredCard]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#"),
        Cell::new("Card").add_attribute(Attribute::Bold),
        Cell::new("Cost"),
        Cell::new("P/T"),
        Cell::new("Mana").fg(Color::Cyan),
        Cell::new("P/T Pts"),
        Cell::new("Ability").fg(Color::Green),
        Cell::new("Power").add_attribute(Attribute::Bold),
        Cell::new("Balance"),
    ]);

    for i in 4..=8 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (i, s) in cards.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&s.card.name).add_attribute(Attribute::Bold),
            Cell::new(&s.card.mana_cost),
            Cell::new(&s.card.power_toughness),
            Cell::new(s.mana_points).fg(Color::Cyan),
            Cell::new(s.pt_points),
            Cell::new(s.ability_points).fg(Color::Green),
            Cell::new(s.total_power).add_attribute(Attribute::Bold),
            Cell::new(s.balance),
        ]);
    }
    println!("\n📊 Cards processed: {}", cards.len());
    println!("{}", table);
}

pub fn print_card_report(report: &CardReport) {
    let s = &report.scored;
    let a = &report.ability;
    let m = &report.mana;

    println!("\n🃏 {}", s.card.name);

    let mut totals = Table::new();
    totals
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    totals.add_row(vec![
        Cell::new("Mana").fg(Color::Cyan),
        Cell::new("P/T"),
        Cell::new("Kw"),
        Cell::new("Trig"),
        Cell::new("Eff"),
        Cell::new("Act"),
        Cell::new("Syn"),
        Cell::new("Drawb").fg(Color::Red),
        Cell::new("Ability").fg(Color::Green),
        Cell::new("Power").add_attribute(Attribute::Bold),
        Cell::new("Balance"),
    ]);
    totals.add_row(vec![
        Cell::new(format!(
            "{} ({}g+{}c)",
            s.mana_points, m.generic_amount, m.colored_pips
        ))
        .fg(Color::Cyan),
        Cell::new(s.pt_points),
        Cell::new(a.keywords),
        Cell::new(a.triggers),
        Cell::new(a.effects),
        Cell::new(a.activated),
        Cell::new(a.synergy),
        Cell::new(a.drawbacks).fg(Color::Red),
        Cell::new(a.total).fg(Color::Green),
        Cell::new(s.total_power).add_attribute(Attribute::Bold),
        Cell::new(s.balance),
    ]);
    println!("{}", totals);

    if !m.ignored_symbols.is_empty() {
        println!("   Ignored mana symbols: {}", m.ignored_symbols.join(", "));
    }

    if a.hits.is_empty() {
        println!("   (no ability rules matched)");
        return;
    }

    let mut hits = Table::new();
    hits.load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    hits.add_row(vec![
        Cell::new("Pass").add_attribute(Attribute::Bold),
        Cell::new("Rule"),
        Cell::new("Matches"),
        Cell::new("Points"),
    ]);
    for hit in &a.hits {
        let color = if hit.points < 0 { Color::Red } else { Color::Green };
        hits.add_row(vec![
            Cell::new(hit.pass),
            Cell::new(&hit.rule),
            Cell::new(hit.matches).set_alignment(CellAlignment::Right),
            Cell::new(hit.points)
                .fg(color)
                .set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", hits);
}

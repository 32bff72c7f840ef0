//! Text rendering for decks and diffs.
//!
//! `format_deck_line`/`format_decklist` rebuild lines in the same
//! `qty name (set) [collector] *F*` shape the parser accepts, so parsed
//! decks round-trip through text. `format_diff_summary` renders a
//! plain-text changelog for notification and export consumers.

use std::cmp::Ordering;

use crate::models::{CardEntry, DiffResult, DiffSection, ParsedDeck};
use crate::normalize;

/// Renders one entry as a decklist line, omitting absent parts.
pub fn format_deck_line(entry: &CardEntry) -> String {
    let mut line = format!("{} {}", entry.quantity, entry.display_name);
    if !entry.set_code.is_empty() {
        line.push_str(&format!(" ({})", entry.set_code));
    }
    if !entry.collector_number.is_empty() {
        line.push_str(&format!(" [{}]", entry.collector_number));
    }
    if entry.is_foil {
        line.push_str(" *F*");
    }
    line
}

/// Renders a whole deck as line-oriented text that parses back to the same
/// deck: commander block first, then the mainboard, then a `Sideboard`
/// header block.
pub fn format_decklist(deck: &ParsedDeck) -> String {
    let mut output = String::new();

    let commander_folds: Vec<String> = deck
        .commanders
        .iter()
        .map(|c| normalize::fold_name(c))
        .collect();
    let is_commander =
        |e: &CardEntry| commander_folds.contains(&normalize::fold_name(&e.display_name));

    let mut mainboard: Vec<&CardEntry> = deck.mainboard.values().collect();
    mainboard.sort_by(|a, b| name_order(&a.display_name, &b.display_name));

    let commander_entries: Vec<&&CardEntry> =
        mainboard.iter().filter(|e| is_commander(e)).collect();
    if !commander_entries.is_empty() {
        output.push_str("Commander\n");
        for entry in commander_entries {
            output.push_str(&format_deck_line(entry));
            output.push('\n');
        }
        output.push('\n');
    }

    for entry in mainboard.iter().filter(|e| !is_commander(e)) {
        output.push_str(&format_deck_line(entry));
        output.push('\n');
    }

    if !deck.sideboard.is_empty() {
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str("Sideboard\n");
        let mut sideboard: Vec<&CardEntry> = deck.sideboard.values().collect();
        sideboard.sort_by(|a, b| name_order(&a.display_name, &b.display_name));
        for entry in sideboard {
            output.push_str(&format_deck_line(entry));
            output.push('\n');
        }
    }

    output
}

/// Renders a diff as a human-readable changelog.
pub fn format_diff_summary(diff: &DiffResult) -> String {
    let mut output = String::new();

    if !diff.commanders.is_empty() {
        output.push_str(&format!("Commander: {}\n\n", diff.commanders.join(", ")));
    }

    if diff.is_empty() {
        output.push_str("No changes.\n");
        return output;
    }

    push_section(&mut output, "Mainboard", &diff.mainboard);
    push_section(&mut output, "Sideboard", &diff.sideboard);
    output
}

fn push_section(output: &mut String, title: &str, section: &DiffSection) {
    if section.is_empty() {
        return;
    }

    output.push_str(&format!("{title}:\n"));
    for row in &section.cards_in {
        output.push_str(&format!("  + {} {}\n", row.quantity, row.name));
    }
    for row in &section.cards_out {
        output.push_str(&format!("  - {} {}\n", row.quantity, row.name));
    }
    for row in &section.quantity_changes {
        let sign = if row.delta >= 0 { "+" } else { "" };
        output.push_str(&format!(
            "  {}: {} -> {} ({}{})\n",
            row.name, row.old_quantity, row.new_quantity, sign, row.delta
        ));
    }
    for row in &section.printing_changes {
        output.push_str(&format!(
            "  {}: {} {} {} -> {}\n",
            row.name,
            row.quantity,
            if row.quantity == 1 { "copy" } else { "copies" },
            printing_label(&row.old_set_code, &row.old_collector_number),
            printing_label(&row.new_set_code, &row.new_collector_number)
        ));
    }
    output.push('\n');
}

fn printing_label(set_code: &str, collector_number: &str) -> String {
    match (set_code.is_empty(), collector_number.is_empty()) {
        (false, false) => format!("({set_code}) [{collector_number}]"),
        (false, true) => format!("({set_code})"),
        (true, false) => format!("[{collector_number}]"),
        (true, true) => "(unknown printing)".to_string(),
    }
}

fn name_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::differ::compute_diff;
    use crate::parser::parse;

    #[test]
    fn formats_full_deck_line() {
        let entry = CardEntry {
            display_name: "Terror of the Peaks".to_string(),
            quantity: 1,
            set_code: "otj".to_string(),
            collector_number: "149".to_string(),
            is_foil: true,
        };
        assert_eq!(
            format_deck_line(&entry),
            "1 Terror of the Peaks (otj) [149] *F*"
        );
    }

    #[test]
    fn formats_bare_line() {
        assert_eq!(
            format_deck_line(&CardEntry::bare("Lightning Bolt", 4)),
            "4 Lightning Bolt"
        );
    }

    #[test]
    fn deck_line_round_trips_through_parse() {
        let deck = parse("3 Nazgul (ltr) [337] *F*");
        let entry = deck.mainboard.values().next().unwrap();
        let reparsed = parse(&format_deck_line(entry));
        assert_eq!(reparsed.mainboard.values().next().unwrap(), entry);
    }

    #[test]
    fn decklist_round_trips_through_parse() {
        let deck = parse(
            "Commander\n1 Atraxa, Praetors' Voice\n\n1 Sol Ring (c21) [263]\n4 Cultivate\n\nSideboard\n2 Duress",
        );
        let reparsed = parse(&format_decklist(&deck));
        assert_eq!(reparsed, deck);
    }

    #[test]
    fn summary_reports_no_changes_for_identical_decks() {
        let deck = parse("4 Lightning Bolt");
        let diff = compute_diff(&deck, &deck);
        assert_eq!(format_diff_summary(&diff), "No changes.\n");
    }

    #[test]
    fn summary_lists_all_change_kinds() {
        let before = parse("2 Shock\n3 Opt\n1 Terror of the Peaks (otj) [149]");
        let after = parse("2 Lightning Bolt\n4 Opt\n1 Terror of the Peaks (m21) [164]");
        let summary = format_diff_summary(&compute_diff(&before, &after));

        assert!(summary.contains("+ 2 Lightning Bolt"));
        assert!(summary.contains("- 2 Shock"));
        assert!(summary.contains("Opt: 3 -> 4 (+1)"));
        assert!(summary.contains("Terror of the Peaks: 1 copy (otj) [149] -> (m21) [164]"));
    }
}

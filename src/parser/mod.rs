//! Decklist parsing.
//!
//! Converts free-form, inconsistently-formatted card-list text from several
//! unrelated export dialects into a canonical [`ParsedDeck`]. Parsing never
//! fails: lines that match no recognized shape are dropped silently (logged
//! at debug level), because permissive ingestion of user-pasted text beats
//! strict validation here.
//!
//! # Module Structure
//!
//! - [`line_matchers`] - ordered pure matchers for the supported line shapes
//! - [`sections`] - mainboard/sideboard/commander section state machine
//! - [`tabular`] - delimited (CSV-style) input path
//!
//! # Example
//!
//! ```
//! use deck_diff::parser::parse;
//!
//! let deck = parse("4 Lightning Bolt\n\nSideboard\n2 Pyroblast");
//! assert_eq!(deck.mainboard.len(), 1);
//! assert_eq!(deck.sideboard.len(), 1);
//! ```

pub mod line_matchers;
pub mod sections;
pub mod tabular;

use log::debug;

use crate::models::{CardEntry, ParsedDeck};
use crate::normalize;

use line_matchers::{strip_commander_marker, try_match};
use sections::{Bucket, Header, SectionState};

/// Parses raw decklist text into a [`ParsedDeck`].
///
/// Empty or whitespace-only input yields an empty deck. The first non-empty
/// line decides the format: a delimited header row routes the whole input
/// through the tabular path, anything else is treated as a line-oriented
/// card list.
pub fn parse(raw: &str) -> ParsedDeck {
    if raw.trim().is_empty() {
        return ParsedDeck::default();
    }

    let first_line = raw.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    if tabular::looks_tabular(first_line) {
        debug!("Detected tabular decklist format");
        return tabular::parse_tabular(raw);
    }

    parse_lines(raw)
}

fn parse_lines(raw: &str) -> ParsedDeck {
    let mut deck = ParsedDeck::default();
    let mut state = SectionState::InMain;
    // Lines parsed into the main section proper; merged commander entries
    // do not arm the implicit-sideboard blank-line transition.
    let mut main_has_content = false;
    let mut explicit_commander_block = false;
    let mut header_commanders: Vec<String> = Vec::new();
    let mut inline_commanders: Vec<String> = Vec::new();

    for raw_line in raw.lines() {
        let line = normalize::normalize_text(raw_line);

        if line.is_empty() {
            state = state.on_blank(main_has_content);
            continue;
        }
        if sections::is_comment(&line) {
            continue;
        }
        if let Some(header) = sections::parse_header(&line) {
            if header == Header::Commander {
                explicit_commander_block = true;
            }
            state = state.on_header(header);
            continue;
        }

        let (line, forced_sideboard) = match sections::strip_sideboard_prefix(&line) {
            Some(rest) => (rest, true),
            None => (line.as_str(), false),
        };
        let (line, inline_commander) = strip_commander_marker(line);

        let Some(matched) = try_match(line) else {
            debug!("Dropping unparseable line: {line}");
            continue;
        };
        if matched.quantity == 0 {
            debug!("Dropping zero-quantity line: {line}");
            continue;
        }

        let entry = CardEntry {
            display_name: matched.name,
            quantity: matched.quantity,
            set_code: matched.set_code,
            collector_number: matched.collector_number,
            is_foil: matched.is_foil,
        };

        if forced_sideboard {
            deck.add_sideboard(entry);
            continue;
        }

        match state.bucket() {
            Bucket::Commander => {
                header_commanders.push(entry.display_name.clone());
                deck.add_mainboard(entry);
            }
            Bucket::Main => {
                if inline_commander {
                    inline_commanders.push(entry.display_name.clone());
                }
                deck.add_mainboard(entry);
                main_has_content = true;
            }
            Bucket::Sideboard => {
                deck.add_sideboard(entry);
            }
        }
    }

    // An explicit commander header block wins; inline markers are only
    // honored in its absence.
    let commanders = if explicit_commander_block {
        header_commanders
    } else {
        inline_commanders
    };
    for name in &commanders {
        deck.add_commander(name);
    }

    deck
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

//! Delimited/tabular decklist parsing.
//!
//! Spreadsheet exports arrive as comma-, semicolon- or tab-separated data
//! with a header row. This path is deliberately degraded: bare-name
//! identities only, no printing metadata and no commander detection.

use log::{debug, warn};

use crate::models::{CardEntry, ParsedDeck};
use crate::normalize;

/// True when the first non-empty line looks like a tabular header: it
/// contains a separator character and a cell recognizable as a
/// quantity/name/card/count column.
pub fn looks_tabular(first_line: &str) -> bool {
    match detect_delimiter(first_line) {
        Some(delimiter) => first_line
            .split(delimiter as char)
            .any(|cell| is_header_cell(cell)),
        None => false,
    }
}

/// Parses the whole input as delimited data. Rows that cannot be used are
/// skipped, never reported.
pub fn parse_tabular(raw: &str) -> ParsedDeck {
    let mut deck = ParsedDeck::default();
    let content = raw.trim_start();

    let header_line = content.lines().next().unwrap_or("");
    let Some(delimiter) = detect_delimiter(header_line) else {
        warn!("Tabular input has no recognizable delimiter");
        return deck;
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => {
            warn!("Failed to read tabular header row: {e}");
            return deck;
        }
    };

    let Some(name_idx) = find_name_column(&headers) else {
        warn!("Tabular input has no name column, dropping all rows");
        return deck;
    };
    let quantity_idx = find_quantity_column(&headers);
    let section_idx = find_section_column(&headers);

    for (row_num, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                debug!("Skipping malformed tabular row {}: {e}", row_num + 2);
                continue;
            }
        };

        let name = normalize::normalize_text(record.get(name_idx).unwrap_or(""));
        if name.is_empty() {
            continue;
        }

        let quantity = match parse_quantity_cell(
            quantity_idx.and_then(|i| record.get(i)).unwrap_or(""),
        ) {
            Some(quantity) => quantity,
            None => {
                debug!("Skipping tabular row {} with unusable quantity", row_num + 2);
                continue;
            }
        };

        let entry = CardEntry::bare(name, quantity);
        if is_sideboard_cell(section_idx.and_then(|i| record.get(i)).unwrap_or("")) {
            deck.add_sideboard(entry);
        } else {
            deck.add_mainboard(entry);
        }
    }

    deck
}

fn detect_delimiter(line: &str) -> Option<u8> {
    if line.contains('\t') {
        Some(b'\t')
    } else if line.contains(';') {
        Some(b';')
    } else if line.contains(',') {
        Some(b',')
    } else {
        None
    }
}

fn is_header_cell(cell: &str) -> bool {
    let cell = cell.trim().to_lowercase();
    cell.contains("name") || cell == "card" || cell == "quantity" || cell == "qty" || cell == "count"
}

/// Prefers an exact "name" header, then any header containing "name", then
/// a plain "card" column.
fn find_name_column(headers: &csv::StringRecord) -> Option<usize> {
    let folded: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
    folded
        .iter()
        .position(|h| h == "name")
        .or_else(|| folded.iter().position(|h| h.contains("name")))
        .or_else(|| folded.iter().position(|h| h == "card"))
}

fn find_quantity_column(headers: &csv::StringRecord) -> Option<usize> {
    headers.iter().position(|h| {
        let h = h.trim().to_lowercase();
        h == "quantity" || h == "qty" || h == "count" || h.contains("quantity")
    })
}

fn find_section_column(headers: &csv::StringRecord) -> Option<usize> {
    headers.iter().position(|h| {
        let h = h.trim().to_lowercase();
        h.contains("section") || h.contains("board") || h == "sb"
    })
}

/// Empty cells default to 1 (the quantity column is optional); zero,
/// negative or non-numeric cells drop the row.
fn parse_quantity_cell(cell: &str) -> Option<u32> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Some(1);
    }
    match cell.parse::<i64>() {
        Ok(q) if q > 0 && q <= u32::MAX as i64 => Some(q as u32),
        _ => None,
    }
}

fn is_sideboard_cell(cell: &str) -> bool {
    let cell = cell.trim().to_lowercase();
    cell == "sb" || cell.contains("side")
}

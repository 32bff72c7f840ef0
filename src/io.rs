use std::fs;
use std::io;
use std::path::Path;

use crate::models::ParsedDeck;
use crate::parser;

/// Reads a decklist file and parses it.
///
/// Only I/O failures surface to the caller; parsing itself never fails and
/// unrecognized lines are dropped.
pub fn read_deck_file<P: AsRef<Path>>(path: P) -> io::Result<ParsedDeck> {
    let raw = fs::read_to_string(path)?;
    Ok(parser::parse(&raw))
}

//! Line-shape matchers for the line-oriented decklist path.
//!
//! Each supported line shape gets its own pure matcher function returning
//! `Option<MatchedLine>`. Matchers are tried in order, most specific first;
//! the first match wins. Lines that match no shape are dropped by the
//! caller.

use lazy_static::lazy_static;
use regex::Regex;

/// Outcome of a successful line match, before key assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedLine {
    pub quantity: u32,
    pub name: String,
    pub set_code: String,
    pub collector_number: String,
    pub is_foil: bool,
}

lazy_static! {
    // "4 Lightning Bolt" - quantity, space, rest of line.
    static ref COUNT_NAME: Regex = Regex::new(r"^(?P<qty>\d+)\s+(?P<rest>\S.*)$").unwrap();
    // "4x Lightning Bolt" / "4 x Lightning Bolt".
    static ref COUNT_X_NAME: Regex =
        Regex::new(r"^(?P<qty>\d+)\s*[xX]\s+(?P<rest>\S.*)$").unwrap();
    // "4,Lightning Bolt" - degraded comma pair, name taken verbatim.
    static ref COUNT_COMMA_NAME: Regex =
        Regex::new(r"^(?P<qty>\d+)\s*,\s*(?P<name>\S.*)$").unwrap();
    // Name plus optional printing suffix: "(set)", "[collector]" or a bare
    // trailing collector number (only after a set code), and a "*F*" foil
    // marker. The bare collector must start with a digit or be a
    // letters-hyphen-digits token ("DDO-20") so trailing name words are
    // never eaten.
    static ref NAME_AND_PRINTING: Regex = Regex::new(
        r"(?x)
        ^(?P<name>.+?)
        (?:\s+\((?P<set>[0-9A-Za-z]{2,6})\)
            (?:\s+(?P<cnb>\d[0-9A-Za-z-]*|[A-Za-z]{1,4}-\d[0-9A-Za-z-]*))?
        )?
        (?:\s+\[(?P<cn>[0-9A-Za-z-]+)\])?
        (?:\s+\*[fF]\*)?$"
    )
    .unwrap();
    static ref FOIL_SUFFIX: Regex = Regex::new(r"\s+\*[fF]\*$").unwrap();
    // Trailing inline commander marker, stripped before shape matching.
    static ref COMMANDER_SUFFIX: Regex =
        Regex::new(r"(?i)\s*(?:\*cmdr\*|\[commander\])\s*$").unwrap();
}

/// Tries every line shape in order and returns the first match.
///
/// The input is expected to be normalized (whitespace collapsed, trimmed).
/// A returned quantity of zero is possible ("0 Lightning Bolt"); the caller
/// enforces the positive-quantity invariant.
pub fn try_match(line: &str) -> Option<MatchedLine> {
    const MATCHERS: [fn(&str) -> Option<MatchedLine>; 4] = [
        match_counted_printed,
        match_count_comma_name,
        match_count_x_name,
        match_bare_name,
    ];
    MATCHERS.iter().find_map(|matcher| matcher(line))
}

/// Strips a trailing inline commander marker (`*CMDR*` or `[Commander]`),
/// returning the remaining line and whether a marker was present.
pub fn strip_commander_marker(line: &str) -> (&str, bool) {
    match COMMANDER_SUFFIX.find(line) {
        Some(m) => (line[..m.start()].trim_end(), true),
        None => (line, false),
    }
}

/// Shape 1: quantity + name + optional printing metadata.
///
/// "4 Lightning Bolt", "1 Terror of the Peaks (otj) [149]",
/// "1 Nazgul (ltr) 337 *F*".
fn match_counted_printed(line: &str) -> Option<MatchedLine> {
    let caps = COUNT_NAME.captures(line)?;
    let rest = caps.name("rest").unwrap().as_str();
    // "4 x Bolt" belongs to the x-separated shape, not here.
    if rest.starts_with("x ") || rest.starts_with("X ") {
        return None;
    }
    let quantity = caps["qty"].parse().ok()?;
    parse_name_and_printing(rest, quantity)
}

/// Shape 2: "quantity,name" pair. Name is taken verbatim; no printing
/// metadata is extracted from this degraded shape.
fn match_count_comma_name(line: &str) -> Option<MatchedLine> {
    let caps = COUNT_COMMA_NAME.captures(line)?;
    let quantity = caps["qty"].parse().ok()?;
    Some(MatchedLine {
        quantity,
        name: caps["name"].trim().to_string(),
        set_code: String::new(),
        collector_number: String::new(),
        is_foil: false,
    })
}

/// Shape 3: quantity + `x` + name ("4x Bolt", "4 x Bolt"). The remainder
/// goes through the same printing-suffix scan as shape 1 so exports that
/// write "4x Name (set) 123" keep their metadata.
fn match_count_x_name(line: &str) -> Option<MatchedLine> {
    let caps = COUNT_X_NAME.captures(line)?;
    let quantity = caps["qty"].parse().ok()?;
    parse_name_and_printing(caps.name("rest").unwrap().as_str(), quantity)
}

/// Shape 4: a bare name, defaulting to quantity 1. Pure-numeric lines are
/// rejected here, not treated as a card.
fn match_bare_name(line: &str) -> Option<MatchedLine> {
    if line.is_empty() || line.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    parse_name_and_printing(line, 1)
}

/// Splits a "name (set) [collector] *F*" tail into its parts. Absent parts
/// come back empty; a bare trailing collector is only recognized after a
/// set code.
fn parse_name_and_printing(text: &str, quantity: u32) -> Option<MatchedLine> {
    let is_foil = FOIL_SUFFIX.is_match(text);
    let caps = NAME_AND_PRINTING.captures(text)?;
    let collector_number = caps
        .name("cn")
        .or_else(|| caps.name("cnb"))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    Some(MatchedLine {
        quantity,
        name: caps["name"].to_string(),
        set_code: caps
            .name("set")
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        collector_number,
        is_foil,
    })
}

#[cfg(test)]
#[path = "line_matchers_tests.rs"]
mod tests;

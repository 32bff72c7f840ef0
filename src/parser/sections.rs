//! Section routing for line-oriented decklists.
//!
//! Lists switch between mainboard, sideboard and commander blocks via
//! headers, and a blank line can start the sideboard implicitly. The
//! blank-line/header interaction is kept in one explicit state machine so
//! it stays auditable in isolation.

/// Current routing target while scanning a list top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
    /// Inside an explicit commander header block.
    InCommander,
    InMain,
    /// Sideboard entered via the first blank line after mainboard content.
    InSideboardImplicit,
    /// Sideboard entered via an explicit header.
    InSideboardExplicit,
}

/// Bucket an entry line is routed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Commander,
    Main,
    Sideboard,
}

/// A recognized section header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    Commander,
    Sideboard,
    Mainboard,
}

impl SectionState {
    pub fn on_header(self, header: Header) -> Self {
        match header {
            Header::Commander => SectionState::InCommander,
            Header::Sideboard => SectionState::InSideboardExplicit,
            Header::Mainboard => SectionState::InMain,
        }
    }

    /// Transition for a blank line. A commander block is terminated by the
    /// blank; the first blank after mainboard content starts the implicit
    /// sideboard.
    pub fn on_blank(self, main_has_content: bool) -> Self {
        match self {
            SectionState::InCommander => SectionState::InMain,
            SectionState::InMain if main_has_content => SectionState::InSideboardImplicit,
            other => other,
        }
    }

    pub fn bucket(self) -> Bucket {
        match self {
            SectionState::InCommander => Bucket::Commander,
            SectionState::InMain => Bucket::Main,
            SectionState::InSideboardImplicit | SectionState::InSideboardExplicit => {
                Bucket::Sideboard
            }
        }
    }
}

/// Recognizes a section header, case-insensitively, with optional trailing
/// punctuation ("Sideboard:", "Commander.").
pub fn parse_header(line: &str) -> Option<Header> {
    let folded = line
        .trim()
        .trim_end_matches(|c: char| c.is_ascii_punctuation())
        .trim_end()
        .to_lowercase();
    match folded.as_str() {
        "commander" | "commanders" | "command zone" => Some(Header::Commander),
        "sideboard" | "sb" => Some(Header::Sideboard),
        "mainboard" | "main" | "deck" => Some(Header::Mainboard),
        _ => None,
    }
}

/// Comment lines are dropped wherever they occur.
pub fn is_comment(line: &str) -> bool {
    line.starts_with("//") || line.starts_with('#')
}

/// Detects the per-line `SB:` prefix which forces a single line into the
/// sideboard regardless of the current section. Returns the rest of the
/// line when present.
pub fn strip_sideboard_prefix(line: &str) -> Option<&str> {
    if line.len() >= 3 && line[..3].eq_ignore_ascii_case("sb:") {
        Some(line[3..].trim_start())
    } else {
        None
    }
}

#[cfg(test)]
#[path = "sections_tests.rs"]
mod tests;

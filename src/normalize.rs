//! Text normalization for card names.
//!
//! Pasted decklists carry typographic apostrophes, stray whitespace and
//! double-faced-card back faces. Display text keeps the normalized
//! original-case form; identity comparisons use the case-folded front face.

/// Apostrophe variants seen in pasted lists (curly quotes, backtick, prime).
const APOSTROPHES: [char; 5] = ['\u{2018}', '\u{2019}', '\u{201B}', '`', '\u{2032}'];

/// Collapses internal whitespace runs to single spaces, normalizes
/// apostrophe variants to `'`, and trims.
pub fn normalize_text(raw: &str) -> String {
    let replaced: String = raw
        .chars()
        .map(|c| if APOSTROPHES.contains(&c) { '\'' } else { c })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns the front face of a possibly double-faced card name, i.e. the
/// text before `" // "`. Single-faced names pass through unchanged.
pub fn front_face(name: &str) -> &str {
    match name.find(" // ") {
        Some(idx) => &name[..idx],
        None => name,
    }
}

/// Case-folded front-face form used for identity comparisons.
pub fn fold_name(name: &str) -> String {
    front_face(name).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize_text("  Lightning \t Bolt  "), "Lightning Bolt");
    }

    #[test]
    fn normalizes_curly_apostrophes() {
        assert_eq!(normalize_text("Urza\u{2019}s Saga"), "Urza's Saga");
        assert_eq!(normalize_text("Urza`s Saga"), "Urza's Saga");
        assert_eq!(normalize_text("Urza\u{2032}s Saga"), "Urza's Saga");
    }

    #[test]
    fn front_face_strips_back_face() {
        assert_eq!(
            front_face("Sheoldred // The True Scriptures"),
            "Sheoldred"
        );
        assert_eq!(front_face("Lightning Bolt"), "Lightning Bolt");
    }

    #[test]
    fn front_face_requires_spaced_slashes() {
        // "//" without surrounding spaces is part of the name, not a face
        // separator.
        assert_eq!(front_face("Fire//Ice"), "Fire//Ice");
    }

    #[test]
    fn fold_name_is_case_insensitive_front_face() {
        assert_eq!(
            fold_name("Sheoldred // The True Scriptures"),
            "sheoldred"
        );
        assert_eq!(fold_name("LIGHTNING BOLT"), "lightning bolt");
    }
}

//! Deck reconciliation.
//!
//! Consumes two [`ParsedDeck`] values and produces a [`DiffResult`]
//! describing additions, removals, quantity changes and printing swaps per
//! section. Pure and deterministic: the same two inputs always produce
//! byte-identical output, since downstream consumers recompute diffs
//! independently and must agree.

pub mod resolver;

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{CardEntry, CardKey, DiffResult, DiffSection, ParsedDeck};
use crate::normalize;

use resolver::GroupChange;

/// Computes the semantic diff between two parsed decks.
///
/// Mainboard and sideboard are diffed independently with the same
/// algorithm. `commanders` is copied verbatim from `after`;
/// `has_sideboard` is true iff either input's sideboard is non-empty.
pub fn compute_diff(before: &ParsedDeck, after: &ParsedDeck) -> DiffResult {
    DiffResult {
        mainboard: diff_section(&before.mainboard, &after.mainboard),
        sideboard: diff_section(&before.sideboard, &after.sideboard),
        has_sideboard: !before.sideboard.is_empty() || !after.sideboard.is_empty(),
        commanders: after.commanders.clone(),
    }
}

fn diff_section(
    before: &HashMap<CardKey, CardEntry>,
    after: &HashMap<CardKey, CardEntry>,
) -> DiffSection {
    // Partition both sides into groups keyed by front-face name.
    let mut groups: HashMap<String, (Vec<CardEntry>, Vec<CardEntry>)> = HashMap::new();
    for entry in before.values() {
        groups
            .entry(normalize::fold_name(&entry.display_name))
            .or_default()
            .0
            .push(entry.clone());
    }
    for entry in after.values() {
        groups
            .entry(normalize::fold_name(&entry.display_name))
            .or_default()
            .1
            .push(entry.clone());
    }

    let mut section = DiffSection::default();
    for (group_before, group_after) in groups.into_values() {
        for change in resolver::resolve_group(&group_before, &group_after) {
            match change {
                GroupChange::Added(row) => section.cards_in.push(row),
                GroupChange::Removed(row) => section.cards_out.push(row),
                GroupChange::QuantityChanged(row) => section.quantity_changes.push(row),
                GroupChange::PrintingChanged(row) => section.printing_changes.push(row),
            }
        }
    }

    sort_section(&mut section);
    section
}

/// Sorts every output sequence case-insensitively by name, with stable
/// secondary keys so re-runs are byte-identical.
fn sort_section(section: &mut DiffSection) {
    section
        .cards_in
        .sort_by(|a, b| name_order(&a.name, &b.name).then_with(|| a.quantity.cmp(&b.quantity)));
    section
        .cards_out
        .sort_by(|a, b| name_order(&a.name, &b.name).then_with(|| a.quantity.cmp(&b.quantity)));
    section
        .quantity_changes
        .sort_by(|a, b| name_order(&a.name, &b.name).then_with(|| a.old_quantity.cmp(&b.old_quantity)));
    section.printing_changes.sort_by(|a, b| {
        name_order(&a.name, &b.name)
            .then_with(|| a.old_set_code.cmp(&b.old_set_code))
            .then_with(|| a.old_collector_number.cmp(&b.old_collector_number))
    });
}

fn name_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

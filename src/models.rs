use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::normalize;

/// One line-item of a decklist.
///
/// `display_name` keeps the original casing (whitespace and apostrophes
/// normalized); identity comparisons go through [`CardKey`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntry {
    pub display_name: String,
    pub quantity: u32,
    /// Set code, empty if unknown (e.g. "m10", "ltr").
    pub set_code: String,
    /// Collector number, empty if unknown. May be alphanumeric with
    /// hyphens ("136p", "DDO-20", "2022-3").
    pub collector_number: String,
    pub is_foil: bool,
}

impl CardEntry {
    /// Creates a bare entry carrying no printing metadata.
    pub fn bare(display_name: impl Into<String>, quantity: u32) -> Self {
        CardEntry {
            display_name: display_name.into(),
            quantity,
            set_code: String::new(),
            collector_number: String::new(),
            is_foil: false,
        }
    }

    /// True when the entry has no set code and no collector number,
    /// i.e. its identity is name-only.
    pub fn is_bare(&self) -> bool {
        self.set_code.is_empty() && self.collector_number.is_empty()
    }

    /// The identity this entry is stored under in a deck section.
    pub fn key(&self) -> CardKey {
        if self.is_bare() {
            CardKey::bare(&self.display_name)
        } else {
            CardKey::printed(&self.display_name, &self.collector_number)
        }
    }
}

/// Identity of a [`CardEntry`] within a deck section.
///
/// Bare entries key on the case-folded front-face name alone; entries with
/// printing metadata append `"|" + collector_number` so distinct printings
/// of the same card stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardKey(String);

impl CardKey {
    /// Name-only identity for entries without printing metadata.
    pub fn bare(name: &str) -> Self {
        CardKey(normalize::fold_name(name))
    }

    /// Name+printing identity for entries with a set code or collector
    /// number.
    pub fn printed(name: &str, collector_number: &str) -> Self {
        CardKey(format!(
            "{}|{}",
            normalize::fold_name(name),
            collector_number
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Canonical structured representation of one pasted decklist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedDeck {
    pub mainboard: HashMap<CardKey, CardEntry>,
    pub sideboard: HashMap<CardKey, CardEntry>,
    /// Commander display names, in first-seen order. Each name also has a
    /// corresponding entry in `mainboard`.
    pub commanders: Vec<String>,
}

impl ParsedDeck {
    pub fn is_empty(&self) -> bool {
        self.mainboard.is_empty() && self.sideboard.is_empty() && self.commanders.is_empty()
    }

    /// Inserts an entry into the mainboard, accumulating quantity when the
    /// key already exists.
    pub fn add_mainboard(&mut self, entry: CardEntry) {
        accumulate(&mut self.mainboard, entry);
    }

    /// Inserts an entry into the sideboard, accumulating quantity when the
    /// key already exists.
    pub fn add_sideboard(&mut self, entry: CardEntry) {
        accumulate(&mut self.sideboard, entry);
    }

    /// Registers a commander display name, deduplicated case-insensitively.
    pub fn add_commander(&mut self, display_name: &str) {
        let folded = normalize::fold_name(display_name);
        if !self
            .commanders
            .iter()
            .any(|c| normalize::fold_name(c) == folded)
        {
            self.commanders.push(display_name.to_string());
        }
    }
}

/// Duplicate keys accumulate quantity; the first-seen entry's display name
/// and printing metadata are kept.
fn accumulate(map: &mut HashMap<CardKey, CardEntry>, entry: CardEntry) {
    if entry.quantity == 0 {
        return;
    }
    match map.entry(entry.key()) {
        std::collections::hash_map::Entry::Occupied(mut existing) => {
            existing.get_mut().quantity += entry.quantity;
        }
        std::collections::hash_map::Entry::Vacant(slot) => {
            slot.insert(entry);
        }
    }
}

/// A card added to or removed from a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTotal {
    pub name: String,
    pub quantity: u32,
}

/// A copy-count change for a card that exists on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityChange {
    pub name: String,
    pub old_quantity: u32,
    pub new_quantity: u32,
    pub delta: i32,
}

impl QuantityChange {
    pub fn new(name: impl Into<String>, old_quantity: u32, new_quantity: u32) -> Self {
        QuantityChange {
            name: name.into(),
            old_quantity,
            new_quantity,
            delta: new_quantity as i32 - old_quantity as i32,
        }
    }
}

/// One specific printing replaced by another, same card and copy count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintingChange {
    pub name: String,
    pub quantity: u32,
    pub old_set_code: String,
    pub old_collector_number: String,
    pub new_set_code: String,
    pub new_collector_number: String,
}

/// All changes within one deck section, each vector sorted
/// case-insensitively by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffSection {
    pub cards_in: Vec<CardTotal>,
    pub cards_out: Vec<CardTotal>,
    pub quantity_changes: Vec<QuantityChange>,
    pub printing_changes: Vec<PrintingChange>,
}

impl DiffSection {
    pub fn is_empty(&self) -> bool {
        self.cards_in.is_empty()
            && self.cards_out.is_empty()
            && self.quantity_changes.is_empty()
            && self.printing_changes.is_empty()
    }
}

/// Result of reconciling two parsed decks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffResult {
    pub mainboard: DiffSection,
    pub sideboard: DiffSection,
    /// True if either input deck had a non-empty sideboard.
    pub has_sideboard: bool,
    /// Copied verbatim from the "after" deck.
    pub commanders: Vec<String>,
}

impl DiffResult {
    pub fn is_empty(&self) -> bool {
        self.mainboard.is_empty() && self.sideboard.is_empty()
    }
}

//! Per-group reconciliation.
//!
//! All entries sharing a front-face name form one reconciliation group.
//! The resolver pairs identical printings first, then classifies whatever
//! is left according to whether any residual entry is bare. Its outcome is
//! a list of tagged changes; an unchanged group emits nothing.

use crate::models::{CardEntry, CardTotal, PrintingChange, QuantityChange};

/// One change produced by resolving a reconciliation group.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupChange {
    Added(CardTotal),
    Removed(CardTotal),
    QuantityChanged(QuantityChange),
    PrintingChanged(PrintingChange),
}

/// Resolves one group of before/after entries sharing a front-face name.
///
/// Step 1 pairs entries with the same full identity (same key, i.e. same
/// collector number when both carry one); each pair resolves independently.
/// Step 2 classifies the residue:
///
/// - If any unmatched entry on either side is bare, the residual
///   quantities pool per side and compare as totals. This is how "7 bare
///   copies" matches a mix of specific printings totaling 7.
/// - With no bare residue, distinct printings never net against each
///   other: a lone equal-quantity residual on each side is a printing
///   swap; anything else becomes independent additions and removals.
pub fn resolve_group(before: &[CardEntry], after: &[CardEntry]) -> Vec<GroupChange> {
    let mut changes = Vec::new();

    let mut before: Vec<&CardEntry> = before.iter().collect();
    let mut after: Vec<&CardEntry> = after.iter().collect();
    before.sort_by_key(|e| e.key());
    after.sort_by_key(|e| e.key());

    // Exact-identity matching on the full key.
    let mut residual_before: Vec<&CardEntry> = Vec::new();
    for b in before {
        match after.iter().position(|a| a.key() == b.key()) {
            Some(pos) => {
                let a = after.remove(pos);
                if a.quantity != b.quantity {
                    changes.push(GroupChange::QuantityChanged(QuantityChange::new(
                        &a.display_name,
                        b.quantity,
                        a.quantity,
                    )));
                }
            }
            None => residual_before.push(b),
        }
    }
    let residual_after = after;

    if residual_before.is_empty() && residual_after.is_empty() {
        return changes;
    }

    let any_bare = residual_before
        .iter()
        .chain(residual_after.iter())
        .any(|e| e.is_bare());

    if any_bare {
        // Asymmetric completeness: the two sides describe printings at
        // different levels of detail, so compare pooled totals.
        let old_total: u32 = residual_before.iter().map(|e| e.quantity).sum();
        let new_total: u32 = residual_after.iter().map(|e| e.quantity).sum();
        let name = residual_after
            .first()
            .or_else(|| residual_before.first())
            .map(|e| e.display_name.clone())
            .unwrap_or_default();

        if old_total == new_total {
            // Pools cancel: bare copies matched against specific printings.
        } else if old_total == 0 {
            changes.push(GroupChange::Added(CardTotal {
                name,
                quantity: new_total,
            }));
        } else if new_total == 0 {
            changes.push(GroupChange::Removed(CardTotal {
                name,
                quantity: old_total,
            }));
        } else {
            changes.push(GroupChange::QuantityChanged(QuantityChange::new(
                name, old_total, new_total,
            )));
        }
    } else if residual_before.len() == 1
        && residual_after.len() == 1
        && residual_before[0].quantity == residual_after[0].quantity
    {
        // A pure printing swap: same card, same copy count, different
        // set/collector.
        let b = residual_before[0];
        let a = residual_after[0];
        changes.push(GroupChange::PrintingChanged(PrintingChange {
            name: a.display_name.clone(),
            quantity: a.quantity,
            old_set_code: b.set_code.clone(),
            old_collector_number: b.collector_number.clone(),
            new_set_code: a.set_code.clone(),
            new_collector_number: a.collector_number.clone(),
        }));
    } else {
        // Fully-specified printings are never netted against each other.
        for b in residual_before {
            changes.push(GroupChange::Removed(CardTotal {
                name: b.display_name.clone(),
                quantity: b.quantity,
            }));
        }
        for a in residual_after {
            changes.push(GroupChange::Added(CardTotal {
                name: a.display_name.clone(),
                quantity: a.quantity,
            }));
        }
    }

    changes
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;

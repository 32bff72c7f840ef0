//! Unit tests for the group resolver.

use super::*;
use crate::models::CardEntry;

fn bare(name: &str, quantity: u32) -> CardEntry {
    CardEntry::bare(name, quantity)
}

fn printed(name: &str, quantity: u32, set_code: &str, collector_number: &str) -> CardEntry {
    CardEntry {
        display_name: name.to_string(),
        quantity,
        set_code: set_code.to_string(),
        collector_number: collector_number.to_string(),
        is_foil: false,
    }
}

mod exact_match_tests {
    use super::*;

    #[test]
    fn identical_entries_resolve_to_nothing() {
        let b = vec![bare("Lightning Bolt", 4)];
        assert!(resolve_group(&b, &b).is_empty());

        let p = vec![printed("Lightning Bolt", 4, "m10", "227")];
        assert!(resolve_group(&p, &p).is_empty());
    }

    #[test]
    fn quantity_change_is_scoped_to_the_matched_printing() {
        let before = vec![printed("Lightning Bolt", 2, "m10", "227")];
        let after = vec![printed("Lightning Bolt", 4, "m10", "227")];
        let changes = resolve_group(&before, &after);
        assert_eq!(changes.len(), 1);
        match &changes[0] {
            GroupChange::QuantityChanged(change) => {
                assert_eq!(change.old_quantity, 2);
                assert_eq!(change.new_quantity, 4);
                assert_eq!(change.delta, 2);
            }
            other => panic!("expected quantity change, got {other:?}"),
        }
    }

    #[test]
    fn matched_pairs_resolve_independently_of_the_rest() {
        // The (m10) pair matches exactly and changes quantity; the bare
        // residual on the after side is a separate addition.
        let before = vec![printed("Lightning Bolt", 2, "m10", "227")];
        let after = vec![
            printed("Lightning Bolt", 3, "m10", "227"),
            bare("Lightning Bolt", 1),
        ];
        let changes = resolve_group(&before, &after);
        assert_eq!(changes.len(), 2);
        assert!(changes.iter().any(|c| matches!(c,
            GroupChange::QuantityChanged(q) if q.old_quantity == 2 && q.new_quantity == 3)));
        assert!(changes.iter().any(|c| matches!(c,
            GroupChange::Added(row) if row.quantity == 1)));
    }
}

mod bare_pool_tests {
    use super::*;

    #[test]
    fn bare_copy_matches_specific_printing() {
        let before = vec![bare("Lightning Bolt", 1)];
        let after = vec![printed("Lightning Bolt", 1, "m10", "227")];
        assert!(resolve_group(&before, &after).is_empty());
    }

    #[test]
    fn bare_total_matches_mixed_printings() {
        let before = vec![bare("Nazgul", 9)];
        let after: Vec<CardEntry> = (330..339)
            .map(|cn| printed("Nazgul", 1, "ltr", &cn.to_string()))
            .collect();
        assert!(resolve_group(&before, &after).is_empty());
    }

    #[test]
    fn unequal_pool_totals_emit_one_quantity_change() {
        let before = vec![bare("Nazgul", 7)];
        let after: Vec<CardEntry> = (330..339)
            .map(|cn| printed("Nazgul", 1, "ltr", &cn.to_string()))
            .collect();
        let changes = resolve_group(&before, &after);
        assert_eq!(changes.len(), 1);
        match &changes[0] {
            GroupChange::QuantityChanged(change) => {
                assert_eq!(change.old_quantity, 7);
                assert_eq!(change.new_quantity, 9);
                assert_eq!(change.delta, 2);
            }
            other => panic!("expected quantity change, got {other:?}"),
        }
    }

    #[test]
    fn one_sided_bare_pool_is_an_addition_or_removal() {
        let changes = resolve_group(&[], &[bare("Opt", 3)]);
        assert_eq!(changes.len(), 1);
        assert!(matches!(&changes[0],
            GroupChange::Added(row) if row.name == "Opt" && row.quantity == 3));

        let changes = resolve_group(&[bare("Opt", 3)], &[]);
        assert_eq!(changes.len(), 1);
        assert!(matches!(&changes[0],
            GroupChange::Removed(row) if row.quantity == 3));
    }

    #[test]
    fn distinct_printings_collapse_against_one_bare_total() {
        let before = vec![
            printed("Nazgul", 4, "ltr", "332"),
            printed("Nazgul", 5, "ltr", "335"),
        ];
        let after = vec![bare("Nazgul", 9)];
        assert!(resolve_group(&before, &after).is_empty());
    }
}

mod full_completeness_tests {
    use super::*;

    #[test]
    fn lone_equal_residuals_are_a_printing_swap() {
        let before = vec![printed("Terror of the Peaks", 1, "otj", "149")];
        let after = vec![printed("Terror of the Peaks", 1, "m21", "164")];
        let changes = resolve_group(&before, &after);
        assert_eq!(changes.len(), 1);
        match &changes[0] {
            GroupChange::PrintingChanged(change) => {
                assert_eq!(change.quantity, 1);
                assert_eq!(change.old_set_code, "otj");
                assert_eq!(change.old_collector_number, "149");
                assert_eq!(change.new_set_code, "m21");
                assert_eq!(change.new_collector_number, "164");
            }
            other => panic!("expected printing change, got {other:?}"),
        }
    }

    #[test]
    fn unequal_quantities_never_net_across_printings() {
        let before = vec![printed("Lightning Bolt", 2, "m10", "227")];
        let after = vec![printed("Lightning Bolt", 1, "m11", "149")];
        let changes = resolve_group(&before, &after);
        assert_eq!(changes.len(), 2);
        assert!(matches!(&changes[0],
            GroupChange::Removed(row) if row.quantity == 2));
        assert!(matches!(&changes[1],
            GroupChange::Added(row) if row.quantity == 1));
    }

    #[test]
    fn multiple_residual_printings_stay_independent() {
        let before = vec![
            printed("Nazgul", 1, "ltr", "332"),
            printed("Nazgul", 1, "ltr", "333"),
        ];
        let after = vec![printed("Nazgul", 1, "ltr", "334")];
        let changes = resolve_group(&before, &after);
        let removed = changes
            .iter()
            .filter(|c| matches!(c, GroupChange::Removed(_)))
            .count();
        let added = changes
            .iter()
            .filter(|c| matches!(c, GroupChange::Added(_)))
            .count();
        assert_eq!((removed, added), (2, 1));
        assert!(!changes
            .iter()
            .any(|c| matches!(c, GroupChange::PrintingChanged(_))));
    }

    #[test]
    fn equal_quantity_swap_requires_lone_residuals() {
        // Two residuals on one side block the printing-swap shape even
        // when totals agree.
        let before = vec![
            printed("Nazgul", 1, "ltr", "332"),
            printed("Nazgul", 1, "ltr", "333"),
        ];
        let after = vec![printed("Nazgul", 2, "ltr", "334")];
        let changes = resolve_group(&before, &after);
        assert_eq!(changes.len(), 3);
        assert!(!changes
            .iter()
            .any(|c| matches!(c, GroupChange::PrintingChanged(_))));
    }
}

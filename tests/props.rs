use lcs_diff_rs::{
    tokenizer::{Lines, Tokenize, Words},
    EditOp, LcsDiff, Op,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_round_trip_lines(old: String, new: String) {
        let ld = LcsDiff::new();
        let script = ld.compare::<Lines>(&old, &new);

        prop_assert_eq!(script.original_text(), old.as_str());
        prop_assert_eq!(script.modified_text(), new.as_str());
    }

    #[test]
    fn prop_round_trip_words(old: String, new: String) {
        let ld = LcsDiff::new();
        let script = ld.compare::<Words>(&old, &new);

        prop_assert_eq!(script.original_text(), old.as_str());
        prop_assert_eq!(script.modified_text(), new.as_str());
    }

    #[test]
    fn prop_length_invariant(old: String, new: String) {
        let ld = LcsDiff::new();
        let script = ld.compare::<Lines>(&old, &new);

        let equals = script.iter().filter(|op| op.op() == Op::Equal).count();
        let removed = script.iter().filter(|op| op.op() == Op::Removed).count();
        let added = script.iter().filter(|op| op.op() == Op::Added).count();

        prop_assert_eq!(Lines::tokenize(&old).len(), equals + removed);
        prop_assert_eq!(Lines::tokenize(&new).len(), equals + added);
    }

    #[test]
    fn prop_identity(text: String) {
        let ld = LcsDiff::new();
        let script = ld.compare::<Lines>(&text, &text);

        prop_assert_eq!(script.len(), Lines::tokenize(&text).len());
        prop_assert!(script.iter().all(|op| op.op() == Op::Equal));
    }

    #[test]
    fn prop_old_empty(text: String) {
        let ld = LcsDiff::new();
        let script = ld.compare::<Lines>("", &text);

        prop_assert!(script.iter().all(|op| op.op() == Op::Added));
    }

    #[test]
    fn prop_new_empty(text: String) {
        let ld = LcsDiff::new();
        let script = ld.compare::<Lines>(&text, "");

        prop_assert!(script.iter().all(|op| op.op() == Op::Removed));
    }

    #[test]
    fn prop_determinism(old: String, new: String) {
        let ld = LcsDiff::new();

        prop_assert_eq!(
            ld.compare::<Lines>(&old, &new),
            ld.compare::<Lines>(&old, &new)
        );
    }

    #[test]
    fn prop_symmetric_counts(old: String, new: String) {
        let ld = LcsDiff::new();
        let forward = ld.compare::<Lines>(&old, &new).stats();
        let backward = ld.compare::<Lines>(&new, &old).stats();

        prop_assert_eq!(forward.additions, backward.deletions);
        prop_assert_eq!(forward.deletions, backward.additions);
        prop_assert_eq!(forward.changes, backward.changes);
    }

    #[test]
    fn prop_stats_count_ops(old: String, new: String) {
        let ld = LcsDiff::new();
        let script = ld.compare::<Lines>(&old, &new);
        let stats = script.stats();

        let added = script.iter().filter(|op| op.op() == Op::Added).count();
        let removed = script.iter().filter(|op| op.op() == Op::Removed).count();

        prop_assert_eq!(stats.additions, added);
        prop_assert_eq!(stats.deletions, removed);
        prop_assert_eq!(stats.changes, added.min(removed));
    }

    #[test]
    fn prop_indices_are_increasing_per_side(old: String, new: String) {
        let ld = LcsDiff::new();
        let script = ld.compare::<Lines>(&old, &new);

        let old_indices = script
            .iter()
            .filter_map(|op| match *op {
                EditOp::Equal { old_index, .. } | EditOp::Removed { old_index, .. } => {
                    Some(old_index)
                }
                EditOp::Added { .. } => None,
            })
            .collect::<Vec<_>>();
        prop_assert_eq!(old_indices, (0..Lines::tokenize(&old).len()).collect::<Vec<_>>());

        let new_indices = script
            .iter()
            .filter_map(|op| match *op {
                EditOp::Equal { new_index, .. } | EditOp::Added { new_index, .. } => {
                    Some(new_index)
                }
                EditOp::Removed { .. } => None,
            })
            .collect::<Vec<_>>();
        prop_assert_eq!(new_indices, (0..Lines::tokenize(&new).len()).collect::<Vec<_>>());
    }

    #[test]
    fn prop_normalized_compare_never_leaks_values(old: String, new: String) {
        let mut ld = LcsDiff::new();
        ld.set_ignore_case(true);
        ld.set_ignore_whitespace(true);

        let script = ld.compare::<Lines>(&old, &new);

        // Whatever matched, the original text reassembles from raw values.
        prop_assert_eq!(script.original_text(), old.as_str());
    }
}

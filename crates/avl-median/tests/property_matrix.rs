use avl_median::{build_tree, reference_median, MedianError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn in_order_is_sorted_distinct_input(xs in prop::collection::vec(any::<i32>(), 0..200)) {
        let tree = build_tree(xs.iter().copied());
        let mut expected = xs.clone();
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(tree.element_count(), expected.len());
        prop_assert_eq!(tree.in_order_values(), expected);
        prop_assert!(tree.assert_valid().is_ok());
    }

    #[test]
    fn reinsertion_is_idempotent(xs in prop::collection::vec(-1000i32..1000, 1..150)) {
        let mut tree = build_tree(xs.iter().copied());
        let values = tree.in_order_values();
        let count = tree.element_count();
        for &x in &xs {
            prop_assert!(!tree.insert(x));
        }
        prop_assert_eq!(tree.in_order_values(), values);
        prop_assert_eq!(tree.element_count(), count);
    }

    #[test]
    fn balanced_after_every_insertion(xs in prop::collection::vec(-500i32..500, 0..150)) {
        let mut tree = build_tree(Vec::new());
        for &x in &xs {
            tree.insert(x);
            prop_assert!(tree.assert_valid().is_ok(), "{}", tree.print(""));
        }
    }

    #[test]
    fn median_matches_reference(xs in prop::collection::vec(any::<i32>(), 0..200)) {
        let tree = build_tree(xs.iter().copied());
        let median = tree.median();
        prop_assert_eq!(median, reference_median(&xs));
        if xs.is_empty() {
            prop_assert_eq!(median, Err(MedianError::EmptyTree));
        }
    }
}

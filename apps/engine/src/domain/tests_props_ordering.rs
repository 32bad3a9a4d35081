//! Property tests for display ordering and the hand sorter.
//!
//! Properties tested:
//! - Sorting is idempotent
//! - Sorting is a permutation of the input
//! - The trump block always precedes non-trumps
//! - Duplicate faces keep input order under any permutation

use std::collections::HashMap;

use proptest::prelude::*;

use crate::domain::hand_sort::is_sorted;
use crate::domain::{display_key, is_trump, sort_hand, test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_sort_is_idempotent(
        hand in test_gens::hand(),
        variant in test_gens::variant(),
    ) {
        let once = sort_hand(&hand, variant);
        let twice = sort_hand(&once, variant);
        prop_assert_eq!(&once, &twice);
        prop_assert!(is_sorted(&once, variant));
    }

    #[test]
    fn prop_sort_is_a_permutation(
        hand in test_gens::hand(),
        variant in test_gens::variant(),
    ) {
        let sorted = sort_hand(&hand, variant);
        let mut a: Vec<&str> = hand.iter().map(|c| c.id.as_str()).collect();
        let mut b: Vec<&str> = sorted.iter().map(|c| c.id.as_str()).collect();
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_trumps_come_first(
        hand in test_gens::hand(),
        variant in test_gens::variant(),
    ) {
        let sorted = sort_hand(&hand, variant);
        let first_plain = sorted.iter().position(|c| !is_trump(c, variant));
        if let Some(idx) = first_plain {
            prop_assert!(sorted[idx..].iter().all(|c| !is_trump(c, variant)));
        }
        for c in &sorted {
            prop_assert_eq!(display_key(c, variant).is_trump(), is_trump(c, variant));
        }
    }

    #[test]
    fn prop_duplicates_keep_relative_order(
        hand in test_gens::unique_cards(12).prop_shuffle(),
        variant in test_gens::variant(),
    ) {
        let sorted = sort_hand(&hand, variant);
        let input_rank: HashMap<&str, usize> =
            hand.iter().enumerate().map(|(i, c)| (c.id.as_str(), i)).collect();
        for pair in sorted.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if a.face() == b.face() {
                prop_assert!(input_rank[a.id.as_str()] < input_rank[b.id.as_str()]);
            }
        }
    }
}

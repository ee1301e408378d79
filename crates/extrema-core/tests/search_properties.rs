//! Property-based tests for the min/max searches.

use extrema_core::{find_min_max_iterative, find_min_max_recursive, ExtremaError};
use proptest::prelude::*;

fn sequence_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000_000i64..1_000_000i64, 1..400)
}

/// A non-empty sequence together with a valid inclusive range inside it.
fn sequence_with_range() -> impl Strategy<Value = (Vec<i64>, usize, usize)> {
    sequence_strategy().prop_flat_map(|data| {
        let len = data.len();
        (Just(data), 0..len).prop_flat_map(move |(data, low)| (Just(data), Just(low), low..len))
    })
}

proptest! {
    #[test]
    fn iterative_matches_full_scan_oracle(data in sequence_strategy()) {
        let result = find_min_max_iterative(&data).unwrap();
        prop_assert_eq!(Some(&result.minimum), data.iter().min());
        prop_assert_eq!(Some(&result.maximum), data.iter().max());
        prop_assert!(result.minimum <= result.maximum);
    }

    #[test]
    fn recursive_equals_iterative_on_every_range((data, low, high) in sequence_with_range()) {
        let recursive = find_min_max_recursive(&data, low, high).unwrap();
        let iterative = find_min_max_iterative(&data[low..=high]).unwrap();
        prop_assert_eq!(recursive, iterative);
    }

    #[test]
    fn searches_are_idempotent((data, low, high) in sequence_with_range()) {
        prop_assert_eq!(
            find_min_max_iterative(&data).unwrap(),
            find_min_max_iterative(&data).unwrap()
        );
        prop_assert_eq!(
            find_min_max_recursive(&data, low, high).unwrap(),
            find_min_max_recursive(&data, low, high).unwrap()
        );
    }

    #[test]
    fn extrema_are_members_of_the_range((data, low, high) in sequence_with_range()) {
        let result = find_min_max_recursive(&data, low, high).unwrap();
        let range = &data[low..=high];
        prop_assert!(range.contains(&result.minimum));
        prop_assert!(range.contains(&result.maximum));
    }

    #[test]
    fn inverted_ranges_are_rejected(data in sequence_strategy(), low in 1usize..400) {
        let high = low - 1;
        let is_invalid_range = matches!(
            find_min_max_recursive(&data, low, high),
            Err(ExtremaError::InvalidRange { .. })
        );
        prop_assert!(is_invalid_range);
    }

    #[test]
    fn float_sequences_agree(data in prop::collection::vec(-1.0e9f64..1.0e9f64, 1..200)) {
        let iterative = find_min_max_iterative(&data).unwrap();
        let recursive = find_min_max_recursive(&data, 0, data.len() - 1).unwrap();
        prop_assert_eq!(iterative, recursive);
    }
}

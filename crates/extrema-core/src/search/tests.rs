use super::*;
use crate::error::ExtremaError;

const SCENARIO: [i32; 8] = [10, 50, 20, 80, 40, 60, 30, 70];

#[test]
fn test_iterative_scenario() {
    let result = find_min_max_iterative(&SCENARIO).unwrap();
    assert_eq!(result.into_tuple(), (10, 80));
}

#[test]
fn test_recursive_scenario() {
    let result = find_min_max_recursive(&SCENARIO, 0, 7).unwrap();
    assert_eq!(result.into_tuple(), (10, 80));
}

#[test]
fn test_single_element() {
    let data = [42];
    assert_eq!(find_min_max_iterative(&data).unwrap().into_tuple(), (42, 42));
    assert_eq!(
        find_min_max_recursive(&data, 0, 0).unwrap().into_tuple(),
        (42, 42)
    );
}

#[test]
fn test_two_elements_either_order() {
    for data in [[3, 7], [7, 3]] {
        assert_eq!(find_min_max_iterative(&data).unwrap().into_tuple(), (3, 7));
        assert_eq!(
            find_min_max_recursive(&data, 0, 1).unwrap().into_tuple(),
            (3, 7)
        );
    }
}

#[test]
fn test_iterative_empty_input() {
    let data: [u64; 0] = [];
    assert_eq!(find_min_max_iterative(&data), Err(ExtremaError::EmptyInput));
}

#[test]
fn test_recursive_inverted_range() {
    assert_eq!(
        find_min_max_recursive(&SCENARIO, 2, 1),
        Err(ExtremaError::InvalidRange {
            low: 2,
            high: 1,
            len: 8
        })
    );
}

#[test]
fn test_recursive_out_of_bounds() {
    assert!(matches!(
        find_min_max_recursive(&SCENARIO, 0, 8),
        Err(ExtremaError::InvalidRange { high: 8, .. })
    ));

    let empty: [f64; 0] = [];
    assert!(matches!(
        find_min_max_recursive(&empty, 0, 0),
        Err(ExtremaError::InvalidRange { len: 0, .. })
    ));
}

#[test]
fn test_recursive_sub_range() {
    // [20, 80, 40, 60]
    let result = find_min_max_recursive(&SCENARIO, 2, 5).unwrap();
    assert_eq!(result.into_tuple(), (20, 80));

    // Odd-length range exercises the uneven split.
    let result = find_min_max_recursive(&SCENARIO, 4, 6).unwrap();
    assert_eq!(result.into_tuple(), (30, 60));
}

#[test]
fn test_floats_and_negatives() {
    let data = [2.5, -3.75, 0.0, 19.5, -3.5];
    assert_eq!(
        find_min_max_iterative(&data).unwrap().into_tuple(),
        (-3.75, 19.5)
    );
    assert_eq!(
        find_min_max_recursive(&data, 0, 4).unwrap().into_tuple(),
        (-3.75, 19.5)
    );
}

#[test]
fn test_all_equal() {
    let data = [5u8; 9];
    assert_eq!(find_min_max_iterative(&data).unwrap().into_tuple(), (5, 5));
    assert_eq!(
        find_min_max_recursive(&data, 0, 8).unwrap().into_tuple(),
        (5, 5)
    );
}

#[test]
fn test_combine() {
    let left = SearchResult::from_pair(4, 9);
    let right = SearchResult::from_pair(1, 6);
    assert_eq!(left.combine(right).into_tuple(), (1, 9));
    assert_eq!(right.combine(left).into_tuple(), (1, 9));
}

#[test]
fn test_finders_agree() {
    let iterative = IterativeFinder.find(&SCENARIO).unwrap();
    let recursive = RecursiveFinder.find(&SCENARIO).unwrap();
    assert_eq!(iterative, recursive);
}

#[test]
fn test_recursive_finder_empty() {
    let empty: [i64; 0] = [];
    assert_eq!(RecursiveFinder.find(&empty), Err(ExtremaError::EmptyInput));
    assert_eq!(
        Strategy::Recursive.find(&empty),
        Err(ExtremaError::EmptyInput)
    );
}

#[test]
fn test_strategy_names() {
    assert_eq!(Strategy::Iterative.to_string(), "Iterative");
    assert_eq!(Strategy::Recursive.to_string(), RecursiveFinder::NAME);
    assert_eq!(Strategy::ALL.len(), 2);
}

#[test]
fn test_deep_range_does_not_overflow_stack() {
    let data: Vec<u32> = (0..1_000_000).rev().collect();
    let result = find_min_max_recursive(&data, 0, data.len() - 1).unwrap();
    assert_eq!(result.into_tuple(), (0, 999_999));
}

#[test]
fn test_spread() {
    let data = [10, 50, 20, 80, 40, 60, 30, 70];
    assert_eq!(find_min_max_iterative(&data).unwrap().spread(), Some(70.0));

    let wide = find_min_max_iterative(&[i64::MIN, 0, i64::MAX]).unwrap();
    assert_eq!(wide.spread(), Some(i64::MAX as f64 - i64::MIN as f64));

    assert_eq!(SearchResult::single(2.5).spread(), Some(0.0));
}

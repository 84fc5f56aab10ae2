//! Property-based tests for list semantics.
//!
//! Random integer and word lists check the algebraic laws of the list:
//! negative indexing, full-range slicing, reversal, sort order, and
//! pop/insert inversion.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use pyl_list::{PythonList, SortOptions, Value};

// -- Strategies --

fn ints_strategy(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000_i64..1_000, 0..max_len)
}

fn words_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::string::string_regex("[a-z]{0,6}").expect("valid regex"),
        0..24,
    )
}

/// A non-empty list together with a valid non-negative offset into it.
fn list_and_offset() -> impl Strategy<Value = (Vec<i64>, usize)> {
    prop::collection::vec(-1_000_i64..1_000, 1..32)
        .prop_flat_map(|items| {
            let len = items.len();
            (Just(items), 0..len)
        })
}

fn to_list(items: &[i64]) -> PythonList {
    items.iter().copied().map(Value::int).collect()
}

fn ints_of(list: &PythonList) -> Vec<i64> {
    list.iter().map(|v| v.as_int().expect("int element")).collect()
}

fn as_index(offset: usize) -> i64 {
    i64::try_from(offset).expect("small offset")
}

// -- Indexing --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_negative_index_mirrors_positive((items, offset) in list_and_offset()) {
        let list = to_list(&items);
        let len = as_index(items.len());
        let i = as_index(offset);
        prop_assert_eq!(list.get(i - len).unwrap(), list.get(i).unwrap());
    }

    #[test]
    fn prop_index_past_end_fails(items in ints_strategy(32), extra in 0_i64..8) {
        let list = to_list(&items);
        let len = as_index(items.len());
        prop_assert!(list.get(len + extra).is_err());
        prop_assert!(list.get(-len - 1 - extra).is_err());
    }

    #[test]
    fn prop_pop_then_insert_restores((items, offset) in list_and_offset()) {
        let mut list = to_list(&items);
        let i = as_index(offset);
        let value = list.pop_at(i).unwrap();
        prop_assert_eq!(list.len(), items.len() - 1);
        list.insert(i, value);
        prop_assert_eq!(ints_of(&list), items);
    }
}

// -- Slicing --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_full_slice_is_independent_copy(items in ints_strategy(32)) {
        let list = to_list(&items);
        let mut copy = list.slice(0, as_index(items.len())).unwrap();
        prop_assert_eq!(&copy, &list);

        copy.append(Value::int(7));
        copy.reverse();
        prop_assert_eq!(ints_of(&list), items);
    }

    #[test]
    fn prop_backwards_range_with_forward_step_is_empty(
        (items, start) in prop::collection::vec(-1_000_i64..1_000, 1..32)
            .prop_flat_map(|items| {
                let len = items.len();
                (Just(items), 1..=len)
            }),
        gap in 0_usize..32,
        step in 1_i64..4,
    ) {
        let list = to_list(&items);
        let stop = as_index(start.saturating_sub(1).saturating_sub(gap));
        let result = list.slice_step(as_index(start), stop, step).unwrap();
        prop_assert!(result.is_empty());
    }

    #[test]
    fn prop_zero_step_always_rejected(items in ints_strategy(16), start in -20_i64..20, stop in -20_i64..20) {
        let list = to_list(&items);
        prop_assert!(list.slice_step(start, stop, 0).is_err());
    }
}

// -- Ordering --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_reverse_is_involution(items in ints_strategy(64)) {
        let mut list = to_list(&items);
        list.reverse();
        list.reverse();
        prop_assert_eq!(ints_of(&list), items);
    }

    #[test]
    fn prop_int_sort_matches_std(items in ints_strategy(64)) {
        let mut list = to_list(&items);
        list.sort().unwrap();

        let mut expected = items;
        expected.sort_unstable();
        prop_assert_eq!(ints_of(&list), expected);
    }

    #[test]
    fn prop_sort_is_idempotent(items in ints_strategy(64)) {
        let mut list = to_list(&items);
        list.sort().unwrap();
        let once = ints_of(&list);
        list.sort().unwrap();
        prop_assert_eq!(ints_of(&list), once);
    }

    #[test]
    fn prop_reversed_sort_is_descending(items in ints_strategy(64)) {
        let mut list = to_list(&items);
        list.sort().unwrap();
        list.sort_with(SortOptions::new().reversed(true)).unwrap();

        let sorted = ints_of(&list);
        prop_assert!(sorted.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn prop_word_sort_matches_std(words in words_strategy()) {
        let mut list: PythonList = words.iter().map(|w| Value::string(w.as_str())).collect();
        list.sort().unwrap();

        let mut expected = words;
        expected.sort();
        let actual: Vec<String> = list
            .iter()
            .map(|v| v.as_str().expect("str element").to_string())
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_extrema_bound_every_element(items in prop::collection::vec(-1_000_i64..1_000, 1..64)) {
        let list = to_list(&items);
        let max = list.max().unwrap().as_int().unwrap();
        let min = list.min().unwrap().as_int().unwrap();
        prop_assert_eq!(Some(&max), items.iter().max());
        prop_assert_eq!(Some(&min), items.iter().min());
    }
}

use super::*;
use pretty_assertions::assert_eq;

fn sorted_keys<K: PartialOrd + Copy>(keys: &[K]) -> Vec<K> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    quicksort(&mut order, keys);
    order.iter().map(|&i| keys[i]).collect()
}

#[test]
fn sorts_floats() {
    assert_eq!(sorted_keys(&[5.0, 2.0, 9.0, 1.0]), vec![1.0, 2.0, 5.0, 9.0]);
}

#[test]
fn sorts_integer_ranks() {
    assert_eq!(sorted_keys(&[3i64, -1, 2, 2, 0]), vec![-1, 0, 2, 2, 3]);
}

#[test]
fn trivial_inputs() {
    assert_eq!(sorted_keys::<f64>(&[]), Vec::<f64>::new());
    assert_eq!(sorted_keys(&[7.0]), vec![7.0]);
    assert_eq!(sorted_keys(&[2.0, 1.0]), vec![1.0, 2.0]);
}

#[test]
fn already_sorted_and_reversed() {
    let ascending: Vec<i64> = (0..200).collect();
    let descending: Vec<i64> = (0..200).rev().collect();
    assert_eq!(sorted_keys(&ascending), ascending);
    assert_eq!(sorted_keys(&descending), ascending);
}

#[test]
fn all_equal_keys() {
    assert_eq!(sorted_keys(&[4i64; 50]), vec![4i64; 50]);
}

#[test]
fn order_stays_a_permutation() {
    let keys = [3i64, 1, 3, 2, 1, 3];
    let mut order: Vec<usize> = (0..keys.len()).collect();
    quicksort(&mut order, &keys);
    let mut seen = order.clone();
    seen.sort_unstable();
    assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn nan_keys_terminate() {
    let keys = [f64::NAN, 1.0, f64::NAN, 0.5, 2.0];
    let mut order: Vec<usize> = (0..keys.len()).collect();
    quicksort(&mut order, &keys);
    assert_eq!(order.len(), keys.len());
}

#[test]
fn large_input_matches_std_sort() {
    // Deterministic pseudo-random keys
    let mut state = 0x2545_f491_u64;
    let keys: Vec<i64> = (0..5_000)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            i64::try_from(state % 1_000).unwrap_or(0)
        })
        .collect();
    let mut expected = keys.clone();
    expected.sort_unstable();
    assert_eq!(sorted_keys(&keys), expected);
}

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn non_negative_in_range_is_identity() {
    assert_eq!(normalize(0, 5, Bounds::Strict), Some(0));
    assert_eq!(normalize(4, 5, Bounds::Strict), Some(4));
    assert_eq!(normalize(4, 5, Bounds::Clamp), Some(4));
}

#[test]
fn past_end_rejects_or_clamps_to_length() {
    assert_eq!(normalize(5, 5, Bounds::Strict), None);
    assert_eq!(normalize(5, 5, Bounds::Clamp), Some(5));
    assert_eq!(normalize(i64::MAX, 5, Bounds::Clamp), Some(5));
}

#[test]
fn negative_counts_from_end() {
    assert_eq!(normalize(-1, 5, Bounds::Strict), Some(4));
    assert_eq!(normalize(-5, 5, Bounds::Strict), Some(0));
    assert_eq!(normalize(-3, 5, Bounds::Clamp), Some(2));
}

#[test]
fn before_start_rejects_or_clamps_to_zero() {
    assert_eq!(normalize(-6, 5, Bounds::Strict), None);
    assert_eq!(normalize(-6, 5, Bounds::Clamp), Some(0));
    assert_eq!(normalize(i64::MIN, 5, Bounds::Clamp), Some(0));
    assert_eq!(normalize(i64::MIN, 5, Bounds::Strict), None);
}

#[test]
fn empty_length() {
    assert_eq!(normalize(0, 0, Bounds::Strict), None);
    assert_eq!(normalize(-1, 0, Bounds::Strict), None);
    assert_eq!(normalize(0, 0, Bounds::Clamp), Some(0));
    assert_eq!(normalize(-1, 0, Bounds::Clamp), Some(0));
}

#[test]
fn clamp_matches_clamping_normalize() {
    for index in [-7, -5, -1, 0, 2, 5, 9] {
        assert_eq!(Some(clamp(index, 5)), normalize(index, 5, Bounds::Clamp));
    }
}

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn max_and_min_offsets() {
    let keys = [5.0, 2.0, 9.0, 1.0];
    assert_eq!(scan(&keys, Extreme::Max), Some(2));
    assert_eq!(scan(&keys, Extreme::Min), Some(3));
}

#[test]
fn first_occurrence_wins_ties() {
    let keys = [1i64, 7, 3, 7, 1];
    assert_eq!(scan(&keys, Extreme::Max), Some(1));
    assert_eq!(scan(&keys, Extreme::Min), Some(0));
}

#[test]
fn works_on_strings() {
    let keys = ["banana", "apple", "cherry"];
    assert_eq!(scan(&keys, Extreme::Max), Some(2));
    assert_eq!(scan(&keys, Extreme::Min), Some(1));
}

#[test]
fn empty_has_no_extreme() {
    assert_eq!(scan::<i64>(&[], Extreme::Max), None);
}

#[test]
fn names() {
    assert_eq!(Extreme::Max.name(), "max");
    assert_eq!(Extreme::Min.name(), "min");
}

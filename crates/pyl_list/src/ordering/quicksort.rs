//! In-place quicksort over an index permutation.
//!
//! Sorts `order` (offsets into `keys`) so that the keys it points at are
//! ascending. The keys themselves never move, which lets the caller gather
//! the original values afterwards instead of matching sorted keys back to
//! values.
//!
//! Partitioning is Hoare-style around the key at the middle slot:
//! - advance the left cursor while its key is below the pivot
//! - retreat the right cursor while its key is above the pivot
//! - swap and step both cursors while they have not crossed
//! - recurse on `[low, right]` and `[left, high]`
//!
//! Not stable: slots with equal keys end up in an unspecified relative
//! order. Incomparable keys (NaN) stop both cursors, so partitioning still
//! terminates.

use crate::stack::ensure_sufficient_stack;

/// Sort `order` ascending by `keys[order[slot]]`.
pub(crate) fn quicksort<K: PartialOrd>(order: &mut [usize], keys: &[K]) {
    if order.len() > 1 {
        sort_range(order, keys, 0, order.len() - 1);
    }
}

fn sort_range<K: PartialOrd>(order: &mut [usize], keys: &[K], low: usize, high: usize) {
    let pivot = &keys[order[low + (high - low) / 2]];

    let mut left = low;
    // None once the right cursor has stepped below offset 0
    let mut right = Some(high);

    while let Some(mut r) = right.filter(|&r| left <= r) {
        while keys[order[left]] < *pivot {
            left += 1;
        }
        while keys[order[r]] > *pivot {
            r -= 1;
        }
        if left <= r {
            order.swap(left, r);
            left += 1;
            right = r.checked_sub(1);
        } else {
            right = Some(r);
        }
    }

    if let Some(r) = right {
        if low < r {
            ensure_sufficient_stack(|| sort_range(order, keys, low, r));
        }
    }
    if left < high {
        ensure_sufficient_stack(|| sort_range(order, keys, left, high));
    }
}

#[cfg(test)]
mod tests;

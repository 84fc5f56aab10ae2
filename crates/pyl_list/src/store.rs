//! Ordered, resizable backing storage addressed by physical offset.
//!
//! Offsets are always `0..len()` with no gaps. Errors here name the
//! physical offset; the list facade turns them into the user-facing
//! index error for the logical index it was given.

use std::slice;

use pyl_value::Value;
use thiserror::Error;

/// Physical offset outside the store.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("offset {offset} out of range for length {length}")]
pub struct OffsetOutOfRange {
    pub offset: usize,
    pub length: usize,
}

/// Insertion-ordered sequence of values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SequenceStore {
    items: Vec<Value>,
}

impl SequenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        SequenceStore {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn from_vec(items: Vec<Value>) -> Self {
        SequenceStore { items }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.items
    }

    fn out_of_range(&self, offset: usize) -> OffsetOutOfRange {
        OffsetOutOfRange {
            offset,
            length: self.items.len(),
        }
    }

    pub fn get(&self, offset: usize) -> Result<&Value, OffsetOutOfRange> {
        self.items
            .get(offset)
            .ok_or_else(|| self.out_of_range(offset))
    }

    /// Replace the value at `offset`, returning the previous one.
    pub fn set(&mut self, offset: usize, value: Value) -> Result<Value, OffsetOutOfRange> {
        let err = self.out_of_range(offset);
        let slot = self.items.get_mut(offset).ok_or(err)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Insert before `offset`. An offset at or past `len()` appends, so
    /// insertion never fails.
    pub fn insert_at(&mut self, offset: usize, value: Value) {
        let offset = offset.min(self.items.len());
        self.items.insert(offset, value);
    }

    /// Remove the value at `offset`, shifting later values down by one.
    pub fn remove_at(&mut self, offset: usize) -> Result<Value, OffsetOutOfRange> {
        if offset >= self.items.len() {
            return Err(self.out_of_range(offset));
        }
        Ok(self.items.remove(offset))
    }

    #[inline]
    pub fn append(&mut self, value: Value) {
        self.items.push(value);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    /// Reorder so that position `k` holds the value previously at `order[k]`.
    ///
    /// `order` must be a permutation of `0..len()`; offsets that repeat or
    /// fall outside the store are skipped, so a malformed order can drop
    /// values but never panic.
    pub fn permute(&mut self, order: &[usize]) {
        let mut slots: Vec<Option<Value>> = std::mem::take(&mut self.items)
            .into_iter()
            .map(Some)
            .collect();
        self.items = order
            .iter()
            .filter_map(|&offset| slots.get_mut(offset).and_then(Option::take))
            .collect();
    }
}

impl Extend<Value> for SequenceStore {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl FromIterator<Value> for SequenceStore {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        SequenceStore {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SequenceStore {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a SequenceStore {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

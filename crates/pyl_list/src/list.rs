//! `PythonList`: the public container.
//!
//! Composes the index normalizer, sequence store, slice engine, classifier
//! and ordering engine behind the list operation set. Positional
//! operations accept signed logical indices; negative indices count from
//! the end.

use std::fmt;

use pyl_value::{
    empty_collection, index_out_of_range, value_not_found, Access, ListError, ListResult,
    Lookup, Value,
};

use crate::index::{clamp, normalize, Bounds};
use crate::ordering::{self, Extreme, SortKey, SortOptions};
use crate::slice;
use crate::store::SequenceStore;

/// Dynamically typed, insertion-ordered list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PythonList {
    store: SequenceStore,
}

// Construction

impl PythonList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list holding `values` in order.
    pub fn from_values(values: Vec<Value>) -> Self {
        PythonList {
            store: SequenceStore::from_vec(values),
        }
    }

    fn from_store(store: SequenceStore) -> Self {
        PythonList { store }
    }

    /// Independent shallow duplicate; payloads are shared, the list is not.
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

// Positional Access

impl PythonList {
    #[cold]
    fn out_of_range(&self, index: i64, access: Access) -> ListError {
        index_out_of_range(index, self.len(), access)
    }

    fn offset(&self, index: i64, access: Access) -> ListResult<usize> {
        normalize(index, self.len(), Bounds::Strict).ok_or_else(|| self.out_of_range(index, access))
    }

    /// Element at `index`.
    pub fn get(&self, index: i64) -> ListResult<&Value> {
        let offset = self.offset(index, Access::Read)?;
        self.store
            .get(offset)
            .map_err(|_| self.out_of_range(index, Access::Read))
    }

    /// Replace the element at `index`.
    pub fn update(&mut self, index: i64, value: Value) -> ListResult<()> {
        let offset = self.offset(index, Access::Assign)?;
        let len = self.len();
        self.store
            .set(offset, value)
            .map(drop)
            .map_err(|_| index_out_of_range(index, len, Access::Assign))
    }

    /// Remove the element at `index`.
    pub fn delete(&mut self, index: i64) -> ListResult<()> {
        self.pop_with(index, Access::Assign).map(drop)
    }

    /// Insert `value` before `index`.
    ///
    /// Never fails: an index past the end appends, one before the start
    /// prepends.
    pub fn insert(&mut self, index: i64, value: Value) {
        let offset = clamp(index, self.len());
        self.store.insert_at(offset, value);
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> ListResult<Value> {
        if self.is_empty() {
            return Err(empty_collection("pop"));
        }
        self.pop_at(-1)
    }

    /// Remove and return the element at `index`.
    pub fn pop_at(&mut self, index: i64) -> ListResult<Value> {
        self.pop_with(index, Access::Pop)
    }

    fn pop_with(&mut self, index: i64, access: Access) -> ListResult<Value> {
        let offset = self.offset(index, access)?;
        let len = self.len();
        self.store
            .remove_at(offset)
            .map_err(|_| index_out_of_range(index, len, access))
    }

    /// Copy of the elements from `start` up to `stop`.
    pub fn slice(&self, start: i64, stop: i64) -> ListResult<PythonList> {
        self.slice_step(start, stop, 1)
    }

    /// Copy of every `step`-th element walking from `start` toward `stop`.
    ///
    /// A zero `step` is rejected with `InvalidStep`.
    pub fn slice_step(&self, start: i64, stop: i64, step: i64) -> ListResult<PythonList> {
        slice::slice(&self.store, start, stop, step).map(PythonList::from_store)
    }
}

// Whole-List Operations

impl PythonList {
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn append(&mut self, value: Value) {
        self.store.append(value);
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Reverse in place.
    pub fn reverse(&mut self) {
        self.store.reverse();
    }

    /// Remove the first element equal to `value`.
    pub fn remove(&mut self, value: &Value) -> ListResult<()> {
        let offset = self
            .store
            .iter()
            .position(|item| item == value)
            .ok_or_else(|| value_not_found(value, Lookup::Remove))?;
        self.store
            .remove_at(offset)
            .map(drop)
            .map_err(|_| value_not_found(value, Lookup::Remove))
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.store.iter().any(|item| item == value)
    }

    /// Number of elements equal to `value`.
    pub fn count(&self, value: &Value) -> usize {
        self.store.iter().filter(|item| *item == value).count()
    }

    /// Offset of the first element equal to `value`.
    pub fn index(&self, value: &Value) -> ListResult<usize> {
        self.index_within(value, 0, i64::MAX)
    }

    /// Offset of the first element equal to `value` at or after `start`.
    pub fn index_from(&self, value: &Value, start: i64) -> ListResult<usize> {
        self.index_within(value, start, i64::MAX)
    }

    /// Offset of the first element equal to `value` in `[start, end)`.
    ///
    /// Both bounds are clamped, so negative bounds count from the end and
    /// out-of-range bounds shrink the window instead of failing.
    pub fn index_within(&self, value: &Value, start: i64, end: i64) -> ListResult<usize> {
        let len = self.len();
        let (from, to) = (clamp(start, len), clamp(end, len));
        self.store
            .as_slice()
            .get(from..to)
            .and_then(|window| window.iter().position(|item| item == value))
            .map(|found| from + found)
            .ok_or_else(|| value_not_found(value, Lookup::Index))
    }

    /// New list holding this list's elements followed by `other`'s.
    pub fn concat<I: IntoIterator<Item = Value>>(&self, other: I) -> PythonList {
        let mut result = self.copy();
        result.extend(other);
        result
    }

    /// New list holding `times` back-to-back copies of this list.
    pub fn repeat(&self, times: usize) -> PythonList {
        (0..times).flat_map(|_| self.iter().cloned()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.store.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        self.store.as_slice()
    }
}

// Ordering

impl PythonList {
    /// Sort in natural order: by value for numbers, lexically for strings.
    ///
    /// An empty list sorts successfully. Mixed content fails with a type
    /// conflict and leaves the list unchanged.
    pub fn sort(&mut self) -> ListResult<()> {
        self.sort_with(SortOptions::new())
    }

    /// Sort with an optional key and optional reversal.
    pub fn sort_with(&mut self, options: SortOptions<'_>) -> ListResult<()> {
        ordering::sort(&mut self.store, options)
    }

    pub fn max(&self) -> ListResult<Value> {
        ordering::extreme(&self.store, None, Extreme::Max)
    }

    pub fn min(&self) -> ListResult<Value> {
        ordering::extreme(&self.store, None, Extreme::Min)
    }

    /// First element with the largest key.
    pub fn max_by(&self, key: SortKey<'_>) -> ListResult<Value> {
        ordering::extreme(&self.store, Some(key), Extreme::Max)
    }

    /// First element with the smallest key.
    pub fn min_by(&self, key: SortKey<'_>) -> ListResult<Value> {
        ordering::extreme(&self.store, Some(key), Extreme::Min)
    }
}

// Trait Implementations

impl fmt::Display for PythonList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl From<Vec<Value>> for PythonList {
    fn from(values: Vec<Value>) -> Self {
        PythonList::from_values(values)
    }
}

impl FromIterator<Value> for PythonList {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        PythonList::from_store(iter.into_iter().collect())
    }
}

impl Extend<Value> for PythonList {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.store.extend(iter);
    }
}

impl IntoIterator for PythonList {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.into_iter()
    }
}

impl<'a> IntoIterator for &'a PythonList {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

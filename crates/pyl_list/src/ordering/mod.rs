//! Sorting and extrema over homogeneous list content.
//!
//! Both entry points classify the content first and pick a payload path
//! from the classification, never from the key that was passed:
//!
//! | content  | no key            | `SortKey::Numeric` | `SortKey::Rank`  |
//! |----------|-------------------|--------------------|------------------|
//! | numeric  | quicksort by value| quicksort by key   | key mismatch     |
//! | textual  | lexical order     | key mismatch       | quicksort by rank|
//! | mixed    | type conflict     | type conflict      | type conflict    |
//!
//! Keys are evaluated once per element up front. Sorting permutes offsets
//! and then gathers the original values, so each element keeps its own
//! variant (an `Int` stays an `Int` even when a `Float` compares equal).
//!
//! An empty list sorts successfully without change. It holds neither
//! category, so its extrema are a type conflict like mixed content.

mod extrema;
mod quicksort;

use std::fmt;

use pyl_value::{key_mismatch, mixed_content, ListResult, PayloadKind, Value};

use crate::classify::{classify, Classification};
use crate::store::SequenceStore;

pub use extrema::Extreme;

use extrema::scan;
use quicksort::quicksort;

/// Caller-supplied ranking for sort, max and min.
#[derive(Clone, Copy)]
pub enum SortKey<'k> {
    /// Maps a numeric element (widened to `f64`) to its ranking.
    Numeric(&'k dyn Fn(f64) -> f64),
    /// Maps a string element to an integer rank.
    Rank(&'k dyn Fn(&str) -> i64),
}

impl<'k> SortKey<'k> {
    pub fn numeric(key: &'k dyn Fn(f64) -> f64) -> Self {
        SortKey::Numeric(key)
    }

    pub fn rank(key: &'k dyn Fn(&str) -> i64) -> Self {
        SortKey::Rank(key)
    }

    /// Content category this key can order.
    pub fn payload_kind(&self) -> PayloadKind {
        match self {
            SortKey::Numeric(_) => PayloadKind::Numeric,
            SortKey::Rank(_) => PayloadKind::Textual,
        }
    }
}

impl fmt::Debug for SortKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Numeric(_) => write!(f, "SortKey::Numeric"),
            SortKey::Rank(_) => write!(f, "SortKey::Rank"),
        }
    }
}

/// Options for [`sort`].
///
/// ```text
/// let by_abs = |x: f64| x.abs();
/// list.sort_with(SortOptions::new().key(SortKey::numeric(&by_abs)).reversed(true))?;
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SortOptions<'k> {
    key: Option<SortKey<'k>>,
    reversed: bool,
}

impl<'k> SortOptions<'k> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Order by `key` instead of natural order.
    #[must_use]
    pub fn key(mut self, key: SortKey<'k>) -> Self {
        self.key = Some(key);
        self
    }

    /// Reverse the fully sorted result.
    #[must_use]
    pub fn reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    pub fn sort_key(&self) -> Option<SortKey<'k>> {
        self.key
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }
}

/// Sort `store` in place.
///
/// Fails before touching the store when the content is mixed or the key
/// does not match the content category.
#[tracing::instrument(level = "trace", skip_all, fields(len = store.len()))]
pub fn sort(store: &mut SequenceStore, options: SortOptions<'_>) -> ListResult<()> {
    let class = classify(store.as_slice());
    tracing::debug!(
        ?class,
        key = ?options.key,
        reversed = options.reversed,
        "sorting list"
    );

    let order = match class {
        Classification::Empty => return Ok(()),
        Classification::Mixed => return Err(mixed_content("sort")),
        Classification::AllNumeric => numeric_order(store.as_slice(), options.key)?,
        Classification::AllText => text_order(store.as_slice(), options.key)?,
    };

    store.permute(&order);
    if options.reversed {
        store.reverse();
    }
    Ok(())
}

/// First element holding the maximum or minimum key.
#[tracing::instrument(level = "trace", skip_all, fields(len = store.len(), which = which.name()))]
pub fn extreme(
    store: &SequenceStore,
    key: Option<SortKey<'_>>,
    which: Extreme,
) -> ListResult<Value> {
    let items = store.as_slice();
    let operation = which.name();
    let class = classify(items);
    tracing::debug!(?class, ?key, operation, "searching extreme");

    let winner = match class {
        Classification::Empty | Classification::Mixed => {
            return Err(mixed_content(operation))
        }
        Classification::AllNumeric => scan(&numeric_keys(items, key, operation)?, which),
        Classification::AllText => {
            let texts = text_payloads(items, operation)?;
            match key {
                None => scan(&texts, which),
                Some(SortKey::Rank(rank)) => {
                    let ranks: Vec<i64> = texts.iter().map(|&s| rank(s)).collect();
                    scan(&ranks, which)
                }
                Some(SortKey::Numeric(_)) => {
                    return Err(key_mismatch(
                        operation,
                        PayloadKind::Numeric,
                        PayloadKind::Textual,
                    ))
                }
            }
        }
    };

    winner
        .and_then(|offset| items.get(offset).cloned())
        .ok_or_else(|| mixed_content(operation))
}

fn f64_identity(x: f64) -> f64 {
    x
}

/// Numeric ranking for every element; natural order ranks by value.
fn numeric_keys(
    items: &[Value],
    key: Option<SortKey<'_>>,
    operation: &'static str,
) -> ListResult<Vec<f64>> {
    let rank: &dyn Fn(f64) -> f64 = match key {
        None => &f64_identity,
        Some(SortKey::Numeric(f)) => f,
        Some(SortKey::Rank(_)) => {
            return Err(key_mismatch(
                operation,
                PayloadKind::Textual,
                PayloadKind::Numeric,
            ))
        }
    };
    items
        .iter()
        .map(|item| {
            item.as_f64()
                .map(rank)
                .ok_or_else(|| mixed_content(operation))
        })
        .collect()
}

fn text_payloads<'a>(items: &'a [Value], operation: &'static str) -> ListResult<Vec<&'a str>> {
    items
        .iter()
        .map(|item| item.as_str().ok_or_else(|| mixed_content(operation)))
        .collect()
}

fn identity_order(len: usize) -> Vec<usize> {
    (0..len).collect()
}

fn numeric_order(items: &[Value], key: Option<SortKey<'_>>) -> ListResult<Vec<usize>> {
    let keys = numeric_keys(items, key, "sort")?;
    let mut order = identity_order(keys.len());
    quicksort(&mut order, &keys);
    Ok(order)
}

fn text_order(items: &[Value], key: Option<SortKey<'_>>) -> ListResult<Vec<usize>> {
    let texts = text_payloads(items, "sort")?;
    let mut order = identity_order(texts.len());
    match key {
        // Natural order is a complete lexical comparison
        None => order.sort_by(|&a, &b| texts[a].cmp(texts[b])),
        Some(SortKey::Rank(rank)) => {
            let ranks: Vec<i64> = texts.iter().map(|&s| rank(s)).collect();
            quicksort(&mut order, &ranks);
        }
        Some(SortKey::Numeric(_)) => {
            return Err(key_mismatch(
                "sort",
                PayloadKind::Numeric,
                PayloadKind::Textual,
            ))
        }
    }
    Ok(order)
}

//! Stepped slice extraction.
//!
//! # Algorithm
//!
//! 1. Clamp `start`; a start that lands one past the end is pulled back to
//!    the last element.
//! 2. Clamp `stop` (no adjustment).
//! 3. If the direction of `step` cannot move from `start` toward `stop`,
//!    the result is empty.
//! 4. Otherwise walk from `start` toward `stop` (exclusive) in increments
//!    of `step`, copying each visited value.
//!
//! The result is an independent store. Because `stop` is clamped at `0`, a
//! descending walk never reaches offset 0.

use pyl_value::{invalid_step, ListResult};

use crate::index::clamp;
use crate::store::SequenceStore;

/// Copy the values selected by `start`, `stop` and `step` into a new store.
///
/// A zero `step` is rejected with `InvalidStep`.
pub fn slice(
    store: &SequenceStore,
    start: i64,
    stop: i64,
    step: i64,
) -> ListResult<SequenceStore> {
    if step == 0 {
        return Err(invalid_step());
    }

    let length = store.len();
    if length == 0 {
        return Ok(SequenceStore::new());
    }

    let mut from = clamp(start, length);
    if from == length {
        from = length.saturating_sub(1);
    }
    let to = clamp(stop, length);

    tracing::debug!(from, to, step, length, "slicing");

    if (from < to && step < 0) || (from > to && step > 0) {
        return Ok(SequenceStore::new());
    }

    let stride = usize::try_from(step.unsigned_abs()).unwrap_or(usize::MAX);
    let items = store.as_slice();
    let mut result = SequenceStore::new();

    if from < to {
        while from < to {
            let Some(value) = items.get(from) else { break };
            result.append(value.clone());
            let Some(next) = from.checked_add(stride) else { break };
            from = next;
        }
    } else {
        while from > to {
            let Some(value) = items.get(from) else { break };
            result.append(value.clone());
            let Some(next) = from.checked_sub(stride) else { break };
            from = next;
        }
    }

    Ok(result)
}

//! Logical index to physical offset mapping.
//!
//! Every positional operation on a list goes through [`normalize`]. A
//! non-negative logical index is its own offset; a negative one counts back
//! from the end (`length + index`). What happens past either end depends on
//! the caller:
//!
//! - `get`, `update`, `delete`, `pop` reject with [`Bounds::Strict`]
//! - `insert`, slice bounds and `index` search bounds clamp with
//!   [`Bounds::Clamp`]: past the end becomes `length`, before the start
//!   becomes `0`

/// Out-of-range policy for [`normalize`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Bounds {
    /// Out of range maps to `None`.
    Strict,
    /// Out of range clamps to `0` or `length`.
    Clamp,
}

/// Map a signed logical index to a physical offset.
///
/// With `Bounds::Clamp` the result is always `Some` and lies in
/// `0..=length`. With `Bounds::Strict` a `Some` result lies in `0..length`.
pub fn normalize(index: i64, length: usize, bounds: Bounds) -> Option<usize> {
    if let Ok(offset) = usize::try_from(index) {
        if offset < length {
            return Some(offset);
        }
        return match bounds {
            Bounds::Clamp => Some(length),
            Bounds::Strict => None,
        };
    }

    // index < 0: count back from the end
    let back = index.unsigned_abs();
    let offset = u64::try_from(length)
        .ok()
        .and_then(|len| len.checked_sub(back))
        .and_then(|pos| usize::try_from(pos).ok());
    match (offset, bounds) {
        (Some(pos), _) => Some(pos),
        (None, Bounds::Clamp) => Some(0),
        (None, Bounds::Strict) => None,
    }
}

/// [`normalize`] with [`Bounds::Clamp`]; the result lies in `0..=length`.
#[inline]
pub fn clamp(index: i64, length: usize) -> usize {
    normalize(index, length, Bounds::Clamp).unwrap_or(length)
}

#[cfg(test)]
mod tests;

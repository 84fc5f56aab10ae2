//! Linear-scan maximum and minimum.

/// Which end of the ordering to select.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Extreme {
    Max,
    Min,
}

impl Extreme {
    /// Operation name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Extreme::Max => "max",
            Extreme::Min => "min",
        }
    }

    /// Strict comparison: ties never replace the current winner.
    fn beats<K: PartialOrd + ?Sized>(self, candidate: &K, current: &K) -> bool {
        match self {
            Extreme::Max => candidate > current,
            Extreme::Min => candidate < current,
        }
    }
}

/// Offset of the first key that is the strict maximum or minimum.
///
/// Returns `None` for an empty slice.
pub(crate) fn scan<K: PartialOrd>(keys: &[K], which: Extreme) -> Option<usize> {
    let (first, rest) = keys.split_first()?;
    let mut best = 0;
    let mut best_key = first;
    for (offset, key) in (1..).zip(rest) {
        if which.beats(key, best_key) {
            best = offset;
            best_key = key;
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests;

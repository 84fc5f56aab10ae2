//! Pyl List - a Python-style list for Rust.
//!
//! This crate provides:
//! - `PythonList`, a dynamically typed, insertion-ordered container
//! - Negative-index addressing (`-1` is the last element)
//! - Half-open slicing with positive or negative step
//! - Sorting and max/min over all-numeric or all-textual content, in
//!   natural order or by a caller-supplied key
//!
//! # Architecture
//!
//! Every positional call maps its logical index to a physical offset through
//! [`index::normalize`] before touching the [`store::SequenceStore`]. Slices
//! go through [`slice::slice`] and always produce an independent copy.
//! Sort and extrema calls classify the content with
//! [`classify::classify`] and dispatch to the numeric or textual path of
//! the [`ordering`] engine; mixed content is rejected before any mutation.
//!
//! # Tracing
//!
//! The engine emits `tracing` events. Call [`init_tracing`] and set
//! `RUST_LOG`, e.g. `RUST_LOG=pyl_list=debug`, to print them.
//!
//! # Example
//!
//! ```text
//! let mut list = pylist![5, 2, 9, 1];
//! list.sort()?;
//! assert_eq!(list.to_string(), "[1, 2, 5, 9]");
//! assert_eq!(list.slice_step(-1, 0, -2)?.to_string(), "[9, 2]");
//! ```

pub mod classify;
pub mod index;
mod list;
pub mod ordering;
pub mod slice;
mod stack;
pub mod store;

use std::sync::Once;

pub use list::PythonList;
pub use ordering::{Extreme, SortKey, SortOptions};
pub use pyl_value::{
    Access, ConflictReason, ErrorCategory, ListError, ListErrorKind, ListResult, Lookup,
    PayloadKind, Value,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG`
/// is set, e.g. `RUST_LOG=pyl_list=debug` or `RUST_LOG=pyl_list::ordering=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Build a [`PythonList`] from a fixed list of values.
///
/// Each element is converted with `Value::from`, so integers, floats and
/// strings can be written directly.
///
/// ```text
/// let list = pylist![1, 2.5, "three"];
/// assert_eq!(list.to_string(), "[1, 2.5, \"three\"]");
/// ```
#[macro_export]
macro_rules! pylist {
    () => {
        $crate::PythonList::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::PythonList::from_values(vec![$($crate::Value::from($value)),+])
    };
}

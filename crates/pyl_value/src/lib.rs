//! Pyl Value - dynamic values and errors for the pylist container.
//!
//! This crate provides:
//! - The element type stored in a list (`Value`) and its shared heap wrapper
//! - The list error taxonomy (`ListError`, `ListErrorKind`, `ListResult`)
//!
//! # Value Categories
//!
//! A `Value` is one of four closed variants: integer, floating point, text,
//! or an opaque payload. Only the first three take part in ordering; the
//! list engine classifies content as numeric (int or float) or textual
//! before it sorts or searches for extrema.
//!
//! # Errors
//!
//! Errors are built only through the factory functions re-exported here
//! (e.g. `index_out_of_range()`), which fill in both the structured kind
//! and the rendered message.

mod errors;
mod value;

pub use errors::{
    Access, ConflictReason, ErrorCategory, ListError, ListErrorKind, ListResult, Lookup,
    PayloadKind,
};
pub use value::{Heap, Opaque, Value};

// Re-export error constructors for use by the list crate
pub use errors::{
    empty_collection, index_out_of_range, invalid_step, key_mismatch, mixed_content,
    value_not_found,
};

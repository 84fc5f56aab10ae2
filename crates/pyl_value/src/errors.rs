//! Error types for list operations.
//!
//! # Structured Error Categories
//!
//! `ListErrorKind` carries typed data for each failure so callers can match
//! on the condition instead of parsing messages. Factory functions (e.g.
//! `index_out_of_range()`) are the public API: they populate both `kind`
//! and `message`, and the message is always `kind.to_string()`.

use std::fmt;

use thiserror::Error;

use crate::value::Value;

/// Result of a list operation.
pub type ListResult<T> = Result<T, ListError>;

/// Which positional access failed; selects the out-of-range wording.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Access {
    /// `get`
    Read,
    /// `update` and `delete`
    Assign,
    /// `pop` with an explicit index
    Pop,
}

impl Access {
    fn out_of_range_message(self) -> &'static str {
        match self {
            Access::Read => "list index out of range",
            Access::Assign => "list assignment index out of range",
            Access::Pop => "pop index out of range",
        }
    }
}

/// Which value lookup failed; selects the not-found wording.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Lookup {
    Remove,
    Index,
}

impl Lookup {
    fn not_found_message(self, value: &str) -> String {
        match self {
            Lookup::Remove => "list.remove(x): x not in list".to_string(),
            Lookup::Index => format!("{value} is not in list"),
        }
    }
}

/// Payload category of list content or of a key function.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PayloadKind {
    Numeric,
    Textual,
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadKind::Numeric => write!(f, "numeric"),
            PayloadKind::Textual => write!(f, "textual"),
        }
    }
}

/// Why an ordering operation rejected the list content.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConflictReason {
    /// Content is neither all numeric nor all textual.
    MixedContent,
    /// The key function orders one category, the content is the other.
    KeyMismatch {
        key: PayloadKind,
        content: PayloadKind,
    },
}

impl ConflictReason {
    fn message(self, operation: &str) -> String {
        match self {
            ConflictReason::MixedContent if operation == "sort" => {
                "cannot sort list due to conflicting item types".to_string()
            }
            ConflictReason::MixedContent => {
                format!("cannot get list {operation} due to conflicting item types")
            }
            ConflictReason::KeyMismatch { key, content } => {
                format!("{operation} key orders {key} values but the list holds {content} values")
            }
        }
    }
}

/// Typed error category for list operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ListErrorKind {
    #[error("{}", .access.out_of_range_message())]
    IndexOutOfRange {
        index: i64,
        length: usize,
        access: Access,
    },

    #[error("{}", .lookup.not_found_message(.value))]
    ValueNotFound { value: String, lookup: Lookup },

    #[error("{}", .reason.message(.operation))]
    TypeConflict {
        operation: &'static str,
        reason: ConflictReason,
    },

    #[error("{operation} from empty list")]
    EmptyCollection { operation: &'static str },

    #[error("slice step cannot be zero")]
    InvalidStep,
}

/// Coarse error category, one per failure class a caller handles.
///
/// Both conflict reasons map to `TypeConflict`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    IndexOutOfRange,
    ValueNotFound,
    TypeConflict,
    EmptyCollection,
    InvalidStep,
}

/// List operation error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ListError {
    /// Structured error category.
    pub kind: ListErrorKind,
    /// Human-readable error message; equals `kind.to_string()`.
    pub message: String,
}

impl ListError {
    fn from_kind(kind: ListErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    /// Coarse category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self.kind {
            ListErrorKind::IndexOutOfRange { .. } => ErrorCategory::IndexOutOfRange,
            ListErrorKind::ValueNotFound { .. } => ErrorCategory::ValueNotFound,
            ListErrorKind::TypeConflict { .. } => ErrorCategory::TypeConflict,
            ListErrorKind::EmptyCollection { .. } => ErrorCategory::EmptyCollection,
            ListErrorKind::InvalidStep => ErrorCategory::InvalidStep,
        }
    }
}

// Positional Errors

/// Logical index has no physical offset.
#[cold]
pub fn index_out_of_range(index: i64, length: usize, access: Access) -> ListError {
    ListError::from_kind(ListErrorKind::IndexOutOfRange {
        index,
        length,
        access,
    })
}

/// Pop on a list with no elements.
#[cold]
pub fn empty_collection(operation: &'static str) -> ListError {
    ListError::from_kind(ListErrorKind::EmptyCollection { operation })
}

/// Slice with a step of zero.
#[cold]
pub fn invalid_step() -> ListError {
    ListError::from_kind(ListErrorKind::InvalidStep)
}

// Lookup Errors

/// Searched value is absent.
///
/// Text is reported without quotes: `a is not in list`.
#[cold]
pub fn value_not_found(value: &Value, lookup: Lookup) -> ListError {
    let value = match value.as_str() {
        Some(text) => text.to_string(),
        None => value.to_string(),
    };
    ListError::from_kind(ListErrorKind::ValueNotFound { value, lookup })
}

// Ordering Errors

/// Content is neither uniformly numeric nor uniformly textual (including
/// no content at all for extrema).
#[cold]
pub fn mixed_content(operation: &'static str) -> ListError {
    ListError::from_kind(ListErrorKind::TypeConflict {
        operation,
        reason: ConflictReason::MixedContent,
    })
}

/// Key function category differs from the classified content.
#[cold]
pub fn key_mismatch(operation: &'static str, key: PayloadKind, content: PayloadKind) -> ListError {
    ListError::from_kind(ListErrorKind::TypeConflict {
        operation,
        reason: ConflictReason::KeyMismatch { key, content },
    })
}

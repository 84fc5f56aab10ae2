//! Opaque payloads: list elements that never take part in ordering.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use super::Heap;

/// An element outside the numeric and textual categories.
///
/// Carries a display label and a shared payload. Two opaque values are equal
/// only when they share the same payload allocation.
#[derive(Clone)]
pub struct Opaque {
    label: Heap<String>,
    payload: Arc<dyn Any + Send + Sync>,
}

impl Opaque {
    pub(super) fn new<T: Any + Send + Sync>(label: impl Into<String>, payload: T) -> Self {
        Opaque {
            label: Heap::new(label.into()),
            payload: Arc::new(payload),
        }
    }

    /// Label used when rendering the value.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Borrow the payload as a concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Identity comparison of the underlying payload.
    pub fn same_payload(&self, other: &Opaque) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.payload), Arc::as_ptr(&other.payload))
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opaque({})", self.label())
    }
}

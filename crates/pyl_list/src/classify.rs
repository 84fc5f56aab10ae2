//! Homogeneity classification of list content.
//!
//! Ordering is only defined over lists whose elements all share one payload
//! category. The classification is computed fresh by every sort and extrema
//! call and returned by value; nothing is cached on the list.

use pyl_value::{PayloadKind, Value};

/// Payload category of an entire list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    /// No elements.
    Empty,
    /// Every element is an integer or a float.
    AllNumeric,
    /// Every element is a string.
    AllText,
    /// Anything else, including any opaque element.
    Mixed,
}

impl Classification {
    /// Payload kind for homogeneous content.
    pub fn payload_kind(self) -> Option<PayloadKind> {
        match self {
            Classification::AllNumeric => Some(PayloadKind::Numeric),
            Classification::AllText => Some(PayloadKind::Textual),
            Classification::Empty | Classification::Mixed => None,
        }
    }
}

/// Classify `items` in a single pass.
///
/// Stops at the first element that leaves neither category possible.
pub fn classify(items: &[Value]) -> Classification {
    if items.is_empty() {
        return Classification::Empty;
    }

    let mut numeric = true;
    let mut text = true;
    for item in items {
        numeric &= item.is_numeric();
        text &= item.is_text();
        if !(numeric || text) {
            break;
        }
    }

    let class = match (numeric, text) {
        (true, _) => Classification::AllNumeric,
        (false, true) => Classification::AllText,
        (false, false) => Classification::Mixed,
    };
    tracing::trace!(?class, len = items.len(), "classified list content");
    class
}

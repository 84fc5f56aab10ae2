//! Runtime values stored in a list.
//!
//! # Heap Enforcement
//!
//! Text and opaque payloads live behind `Heap<T>`, whose constructor is
//! private to this module. External code builds values through the factory
//! methods:
//!
//! ```text
//! let n = Value::int(42);                 // OK
//! let s = Value::string("hello");         // OK
//! let s = Value::Str(Heap::new(...));     // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Numeric Interchangeability
//!
//! Integers and floats compare by numeric value across variants, so
//! `Value::int(2) == Value::float(2.0)`. All other cross-variant comparisons
//! are unequal.

mod heap;
mod opaque;

use std::any::Any;
use std::fmt;

pub use heap::Heap;
pub use opaque::Opaque;

/// 2^63 as an `f64`: the exclusive upper bound of floats that fit in `i64`.
const I64_EXCLUSIVE_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Dynamic list element.
#[derive(Clone)]
pub enum Value {
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Text value.
    Str(Heap<String>),
    /// Any other payload; never numeric, never textual.
    Other(Opaque),
}

// Factory Methods

impl Value {
    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a floating-point value.
    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a text value.
    ///
    /// # Example
    ///
    /// ```text
    /// let s = Value::string("hello");
    /// let s2 = Value::string(format!("item {n}"));
    /// ```
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create an opaque value with a display label.
    ///
    /// # Example
    ///
    /// ```text
    /// let flag = Value::other("True", true);
    /// ```
    #[inline]
    pub fn other<T: Any + Send + Sync>(label: impl Into<String>, payload: T) -> Self {
        Value::Other(Opaque::new(label, payload))
    }
}

// Value Methods

impl Value {
    /// Integer payload, if this is an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric payload widened to `f64`, if this is an integer or a float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            #[expect(
                clippy::cast_precision_loss,
                reason = "numeric ordering works on f64 keys; integers beyond 2^53 round"
            )]
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Text payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Opaque payload, if this is neither numeric nor textual.
    pub fn as_opaque(&self) -> Option<&Opaque> {
        match self {
            Value::Other(o) => Some(o),
            _ => None,
        }
    }

    /// Integer or float.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// String.
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Get the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Other(_) => "other",
        }
    }
}

/// Exact comparison of an integer with a float.
///
/// Avoids widening the integer, which would make `i64::MAX` equal to
/// `i64::MAX - 1` once both round to the same `f64`.
fn int_equals_float(n: i64, f: f64) -> bool {
    if !f.is_finite() || f.fract() != 0.0 || !(-I64_EXCLUSIVE_BOUND..I64_EXCLUSIVE_BOUND).contains(&f)
    {
        return false;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "f is integral and within i64 range"
    )]
    let truncated = f as i64;
    truncated == n
}

/// Decimal exponents rendered positionally; outside this range floats use
/// scientific notation (`1e+16`, `1e-05`).
const POSITIONAL_EXPONENTS: std::ops::Range<i32> = -4..16;

/// Render a float the way the list displays it.
///
/// Uses the shortest round-trip digits. Positional output always carries a
/// fraction (`2.0`); scientific output has a signed, two-digit exponent.
fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        return write!(f, "nan");
    }
    if x.is_infinite() {
        return write!(f, "{}", if x > 0.0 { "inf" } else { "-inf" });
    }

    let scientific = format!("{x:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return write!(f, "{x:?}");
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return write!(f, "{x:?}");
    };

    if POSITIONAL_EXPONENTS.contains(&exponent) {
        let positional = x.to_string();
        if positional.contains('.') {
            f.write_str(&positional)
        } else {
            write!(f, "{positional}.0")
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}

// Trait Implementations

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n:?})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Other(o) => write!(f, "Other({})", o.label()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write_float(f, *x),
            Value::Str(s) => write!(f, "\"{}\"", &**s),
            Value::Other(o) => write!(f, "<{}>", o.label()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(n), Value::Float(x)) | (Value::Float(x), Value::Int(n)) => {
                int_equals_float(*n, *x)
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Other(a), Value::Other(b)) => a.same_payload(b),
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

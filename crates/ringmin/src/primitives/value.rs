//! Heterogeneous numeric element representation.
//!
//! ## Purpose
//!
//! This module defines [`Value`], the tagged union an element of a mixed
//! ring can take: an integer, a 32-bit or 64-bit float, numeric text, or an
//! unrecognized representation. A single normalization function maps every
//! numeric kind to a canonical `f64` for comparison.
//!
//! ## Design notes
//!
//! * **Explicit dispatch**: Each conversion is a match over the variants;
//!   there is no runtime type inspection and no unchecked coercion.
//! * **Widening only**: `i64` and `f32` widen to `f64`; `f64` passes
//!   through unchanged.
//! * **Text**: Parsed with `str::parse::<f64>`; the text is not trimmed or
//!   otherwise rewritten before parsing.
//!
//! ## Invariants
//!
//! * `normalize` fails on every variant that is not a recognized numeric
//!   kind; it never panics.
//! * `as_int` succeeds only for `Int`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// Internal dependencies
use crate::primitives::errors::RingMinError;

// ============================================================================
// Value
// ============================================================================

/// One element of a mixed-representation ring.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A signed integer.
    Int(i64),

    /// A 32-bit floating-point number.
    Float32(f32),

    /// A 64-bit floating-point number.
    Float64(f64),

    /// Text expected to hold a parseable number.
    Text(String),

    /// An unrecognized, non-numeric representation.
    Bool(bool),
}

impl Value {
    /// Name of this value's representation, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "i64",
            Self::Float32(_) => "f32",
            Self::Float64(_) => "f64",
            Self::Text(_) => "text",
            Self::Bool(_) => "bool",
        }
    }

    /// Normalize this value to a canonical `f64`.
    ///
    /// Integers and 32-bit floats widen, 64-bit floats pass through, and
    /// text is parsed. Unparsable text fails with [`RingMinError::Parse`];
    /// any non-numeric representation fails with
    /// [`RingMinError::UnsupportedType`].
    pub fn normalize(&self) -> Result<f64, RingMinError> {
        match self {
            Self::Int(v) => Ok(*v as f64),
            Self::Float32(v) => Ok(f64::from(*v)),
            Self::Float64(v) => Ok(*v),
            Self::Text(s) => s.parse::<f64>().map_err(|_| RingMinError::Parse {
                text: s.clone(),
            }),
            Self::Bool(_) => Err(RingMinError::UnsupportedType { kind: self.kind() }),
        }
    }

    /// Extract the integer payload.
    ///
    /// Fails with [`RingMinError::NotAnInteger`] for every other
    /// representation, including floats that happen to hold whole numbers.
    pub fn as_int(&self) -> Result<i64, RingMinError> {
        match self {
            Self::Int(v) => Ok(*v),
            other => Err(RingMinError::NotAnInteger { kind: other.kind() }),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(String::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

//! Single-pass minimum selection.
//!
//! ## Purpose
//!
//! This module implements the linear-scan selection pass: seed an
//! accumulator from the first element visited, then visit every remaining
//! element exactly once in ring order, keeping the strictly smaller value.
//! O(n) time, O(1) extra space, no sorting and no allocation.
//!
//! ## Design notes
//!
//! * **Integer-only**: Every element must be [`Value::Int`]; any other
//!   representation fails with a typed error instead of an unchecked
//!   coercion.
//! * **Ring order**: The pass starts at the ring's head, so the result is
//!   the same for every rotation of the same multiset.

// Internal dependencies
use crate::primitives::errors::RingMinError;
use crate::primitives::ring::Ring;
use crate::primitives::value::Value;

/// Return the smallest integer in the ring without sorting.
///
/// An empty ring fails with [`RingMinError::EmptyInput`]; the first
/// non-integer element encountered fails with
/// [`RingMinError::NotAnInteger`].
pub fn smallest(ring: &Ring<Value>) -> Result<i64, RingMinError> {
    let mut iter = ring.iter();

    // Seed the accumulator with the first element visited
    let first = iter.next().ok_or(RingMinError::EmptyInput)?;
    let mut smallest = first.as_int()?;

    for value in iter {
        let candidate = value.as_int()?;
        if candidate < smallest {
            smallest = candidate;
        }
    }

    Ok(smallest)
}

//! Rank selection over mixed numeric representations.
//!
//! ## Purpose
//!
//! This module implements the type-flexible selection pass: every element
//! of the ring is normalized to a canonical `f64`, the normalized values
//! are sorted ascending, and the element at a caller-supplied rank is
//! returned (rank 0 is the smallest, rank 1 the second smallest, and so
//! on). O(n log n) time, O(n) extra space.
//!
//! ## Design notes
//!
//! * **Fail-fast**: Checks are ordered cheap to expensive; the rank bound
//!   is verified before any element is normalized.
//! * **Finiteness**: Text such as `"NaN"` or `"inf"` parses successfully
//!   but is rejected before sorting, so the comparison sort never sees a
//!   non-finite value.
//! * **Stability**: The sort is stable, preserving the traversal order of
//!   equal normalized values.
//!
//! ## Invariants
//!
//! * The ring is never mutated; normalization materializes a temporary
//!   sequence.
//! * On success the returned value is finite.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::RingMinError;
use crate::primitives::ring::Ring;
use crate::primitives::sorting::ascending_floats;
use crate::primitives::value::Value;

/// Return the value at `rank` in the ascending order of the normalized ring.
///
/// Fails with [`RingMinError::EmptyInput`] on an empty ring,
/// [`RingMinError::RankOutOfRange`] when `rank >= len`, and propagates the
/// normalization errors of [`Value::normalize`].
pub fn nth_smallest(ring: &Ring<Value>, rank: usize) -> Result<f64, RingMinError> {
    let n = ring.len();
    if n == 0 {
        return Err(RingMinError::EmptyInput);
    }
    if rank >= n {
        return Err(RingMinError::RankOutOfRange { rank, len: n });
    }

    // Materialize the normalized values in traversal order
    let mut normalized: Vec<f64> = Vec::with_capacity(n);
    for value in ring {
        let v = value.normalize()?;
        if !v.is_finite() {
            return Err(RingMinError::InvalidNumericValue(format!(
                "{} (from a {} element)",
                v,
                value.kind()
            )));
        }
        normalized.push(v);
    }

    let sorted = ascending_floats(&normalized);

    Ok(sorted[rank])
}

/// Return the smallest normalized value in the ring.
///
/// Equivalent to [`nth_smallest`] at rank 0.
#[inline]
pub fn smallest(ring: &Ring<Value>) -> Result<f64, RingMinError> {
    nth_smallest(ring, 0)
}

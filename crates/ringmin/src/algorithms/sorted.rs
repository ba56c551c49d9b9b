//! Sort-based minimum selection.
//!
//! ## Purpose
//!
//! This module implements the most direct selection pass: copy the ring
//! contents, sort the copy ascending, and take the first element. O(n log n)
//! time, O(n) extra space.
//!
//! ## Design notes
//!
//! * **Generics**: Generic over `PrimInt` so any primitive integer width
//!   works.
//! * **Copy, not mutate**: The ring keeps its original order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::errors::RingMinError;
use crate::primitives::ring::Ring;
use crate::primitives::sorting::ascending;

/// Return the smallest integer in the ring.
///
/// Copies the ring contents in traversal order, sorts the copy ascending,
/// and returns the element at index 0. An empty ring fails with
/// [`RingMinError::EmptyInput`].
#[inline]
pub fn smallest<T: PrimInt>(ring: &Ring<T>) -> Result<T, RingMinError> {
    if ring.is_empty() {
        return Err(RingMinError::EmptyInput);
    }

    let values: Vec<T> = ring.iter().copied().collect();
    let sorted = ascending(&values);

    Ok(sorted[0])
}

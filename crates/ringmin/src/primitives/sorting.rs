//! Sorting utilities for ring selection.
//!
//! ## Purpose
//!
//! This module produces ascending copies of ring contents. Selection never
//! mutates the input ring, so every sort operates on a fresh copy.
//!
//! ## Design notes
//!
//! * **Stability**: Float sorting uses a stable sort to preserve the
//!   relative order of equal values.
//! * **Fast path**: Already-ascending input is copied without sorting.
//! * **Copy, not mutate**: Callers keep their original ordering; the ring
//!   itself is untouched.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Sorting Functions
// ============================================================================

/// Copy `values` and sort the copy ascending.
#[inline]
pub fn ascending<T: Ord + Copy>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();

    // Fast path: already ascending
    if sorted.windows(2).all(|w| w[0] <= w[1]) {
        return sorted;
    }

    sorted.sort_unstable();
    sorted
}

/// Copy `values` and stable-sort the copy ascending.
///
/// Comparison falls back to `Ordering::Equal` for incomparable pairs; the
/// caller is expected to have rejected non-finite values beforehand.
#[inline]
pub fn ascending_floats<T: Float>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();

    // Fast path: already ascending
    if sorted.windows(2).all(|w| w[0] <= w[1]) {
        return sorted;
    }

    // Stable sort to preserve order of equal values for determinism
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

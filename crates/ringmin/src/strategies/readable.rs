//! Readable strategy: sort a copy, take the first element.
//!
//! ## Purpose
//!
//! This module provides the builder and runner for the sort-based strategy.
//! It favors obviousness over speed: the whole ring is copied, sorted
//! ascending, and the first element is the answer.
//!
//! ## Key concepts
//!
//! * **Rank 0 only**: This strategy answers "the smallest" and nothing
//!   else; configuring a rank is reported as an unsupported feature at
//!   `build()`.
//!
//! ## Invariants
//!
//! * The input ring is never mutated.
//! * Output rank is always 0.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::algorithms::sorted;
use crate::engine::output::Selection;
use crate::engine::validator::Validator;
use crate::primitives::errors::RingMinError;
use crate::primitives::ring::Ring;

// ============================================================================
// Readable Builder
// ============================================================================

/// Builder for the sort-based selection runner.
#[derive(Debug, Clone, Default)]
pub struct ReadableMinBuilder {
    /// Deferred error from strategy conversion.
    pub(crate) deferred_error: Option<RingMinError>,

    /// Tracks if any parameter was set multiple times (for validation).
    pub(crate) duplicate_param: Option<&'static str>,
}

impl ReadableMinBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the sort-based selection runner.
    pub fn build(self) -> Result<ReadableMin, RingMinError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(ReadableMin { _private: () })
    }
}

// ============================================================================
// Readable Runner
// ============================================================================

/// Sort-based selection runner.
#[derive(Debug, Clone)]
pub struct ReadableMin {
    _private: (),
}

impl ReadableMin {
    /// Find the smallest integer in the ring.
    pub fn evaluate<T: PrimInt>(&self, ring: &Ring<T>) -> Result<Selection<T>, RingMinError> {
        Validator::validate_nonempty(ring.len())?;

        let value = sorted::smallest(ring)?;

        Ok(Selection {
            value,
            rank: 0,
            len: ring.len(),
            strategy: "sorted copy",
        })
    }
}

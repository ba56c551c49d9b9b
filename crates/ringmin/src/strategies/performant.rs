//! Performant strategy: single-pass linear scan.
//!
//! ## Purpose
//!
//! This module provides the builder and runner for the linear-scan
//! strategy. It makes exactly one pass over the ring in ring order,
//! tracking the running minimum, and allocates nothing.
//!
//! ## Key concepts
//!
//! * **Integer-only**: Every element must be an integer; the first
//!   non-integer representation encountered is reported as a typed error.
//! * **Rank 0 only**: Like the readable strategy, the scan answers "the
//!   smallest" and nothing else.
//!
//! ## Invariants
//!
//! * The input ring is never mutated.
//! * The result is identical for every rotation of the same multiset.

// Internal dependencies
use crate::algorithms::scan;
use crate::engine::output::Selection;
use crate::engine::validator::Validator;
use crate::primitives::errors::RingMinError;
use crate::primitives::ring::Ring;
use crate::primitives::value::Value;

// ============================================================================
// Performant Builder
// ============================================================================

/// Builder for the linear-scan selection runner.
#[derive(Debug, Clone, Default)]
pub struct PerformantMinBuilder {
    /// Deferred error from strategy conversion.
    pub(crate) deferred_error: Option<RingMinError>,

    /// Tracks if any parameter was set multiple times (for validation).
    pub(crate) duplicate_param: Option<&'static str>,
}

impl PerformantMinBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the linear-scan selection runner.
    pub fn build(self) -> Result<PerformantMin, RingMinError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(PerformantMin { _private: () })
    }
}

// ============================================================================
// Performant Runner
// ============================================================================

/// Linear-scan selection runner.
#[derive(Debug, Clone)]
pub struct PerformantMin {
    _private: (),
}

impl PerformantMin {
    /// Find the smallest integer in the ring with a single pass.
    pub fn evaluate(&self, ring: &Ring<Value>) -> Result<Selection<i64>, RingMinError> {
        Validator::validate_nonempty(ring.len())?;

        let value = scan::smallest(ring)?;

        Ok(Selection {
            value,
            rank: 0,
            len: ring.len(),
            strategy: "linear scan",
        })
    }
}

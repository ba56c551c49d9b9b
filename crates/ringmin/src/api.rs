//! High-level API for ring selection.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder for configuring selection and choosing an execution
//! strategy (Readable, Flexible, or Performant).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults.
//! * **Polymorphic**: Uses marker types to transition to specialized
//!   strategy builders.
//! * **Validated**: Configuration is validated when `.build()` is called on
//!   the strategy builder; features a strategy cannot honor are deferred as
//!   errors during conversion rather than silently ignored.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`RingMinBuilder`] via `RingMin::new()`.
//! 2. Chain configuration methods (`.rank()`).
//! 3. Select a strategy via `.strategy(Flexible)` to get a strategy
//!    builder, then `.build()` and `.evaluate(&ring)`.

// Internal dependencies
use crate::strategies::flexible::FlexibleMinBuilder;
use crate::strategies::performant::PerformantMinBuilder;
use crate::strategies::readable::ReadableMinBuilder;

// Publicly re-exported types
pub use crate::engine::output::Selection;
pub use crate::primitives::errors::RingMinError;
pub use crate::primitives::ring::{Ring, RingIter};
pub use crate::primitives::value::Value;
pub use crate::strategies::flexible::FlexibleMin;
pub use crate::strategies::performant::PerformantMin;
pub use crate::strategies::readable::ReadableMin;

/// Marker types for selecting execution strategies.
#[allow(non_snake_case)]
pub mod Strategy {
    pub use super::{Flexible, Performant, Readable};
}

// ============================================================================
// Generic Builder
// ============================================================================

/// Fluent builder for configuring ring selection.
#[derive(Debug, Clone, Default)]
pub struct RingMinBuilder {
    /// Zero-based rank to select (Flexible only).
    pub rank: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl RingMinBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            rank: None,
            duplicate_param: None,
        }
    }

    /// Set the zero-based rank to select (0 = smallest).
    ///
    /// Only the Flexible strategy honors a rank; the other strategies
    /// report it as an unsupported feature at `build()`.
    pub fn rank(mut self, rank: usize) -> Self {
        if self.rank.is_some() {
            self.duplicate_param = Some("rank");
        }
        self.rank = Some(rank);
        self
    }

    /// Select an execution strategy to transition to a strategy builder.
    pub fn strategy<S>(self, _strategy: S) -> S::Output
    where
        S: SelectionStrategy,
    {
        S::convert(self)
    }
}

/// Trait for transitioning from the generic builder to a strategy builder.
pub trait SelectionStrategy {
    /// The output strategy builder.
    type Output;

    /// Convert a generic [`RingMinBuilder`] into a strategy builder.
    fn convert(builder: RingMinBuilder) -> Self::Output;
}

// ============================================================================
// Strategy Markers
// ============================================================================

/// Marker for sort-based selection.
#[derive(Debug, Clone, Copy)]
pub struct Readable;

impl SelectionStrategy for Readable {
    type Output = ReadableMinBuilder;

    fn convert(builder: RingMinBuilder) -> Self::Output {
        let mut result = ReadableMinBuilder::default();

        if builder.rank.is_some() {
            result.deferred_error = Some(RingMinError::UnsupportedFeature {
                strategy: "Readable",
                feature: "rank selection",
            });
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for rank selection over mixed representations.
#[derive(Debug, Clone, Copy)]
pub struct Flexible;

impl SelectionStrategy for Flexible {
    type Output = FlexibleMinBuilder;

    fn convert(builder: RingMinBuilder) -> Self::Output {
        let mut result = FlexibleMinBuilder::default();

        if let Some(rank) = builder.rank {
            result.rank = rank;
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for single-pass linear-scan selection.
#[derive(Debug, Clone, Copy)]
pub struct Performant;

impl SelectionStrategy for Performant {
    type Output = PerformantMinBuilder;

    fn convert(builder: RingMinBuilder) -> Self::Output {
        let mut result = PerformantMinBuilder::default();

        if builder.rank.is_some() {
            result.deferred_error = Some(RingMinError::UnsupportedFeature {
                strategy: "Performant",
                feature: "rank selection",
            });
        }
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

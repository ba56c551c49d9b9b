//! Error types for ring selection operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while selecting
//! values from a ring, including input validation, element normalization,
//! and strategy configuration failures.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the rank and the
//!   ring length, or the offending text).
//! * **Deferred**: Configuration errors are often caught and stored during
//!   builder conversion, then reported at `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic
//!   messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty rings, out-of-range ranks.
//! 2. **Element normalization**: Unparsable text, unsupported
//!    representations, non-finite normalized values.
//! 3. **Strategy constraints**: Features a strategy does not support,
//!    parameters set more than once.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for ring selection operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RingMinError {
    /// The ring contains no elements; selection requires at least 1.
    EmptyInput,

    /// A text element could not be interpreted as a number.
    Parse {
        /// The text that failed to parse.
        text: String,
    },

    /// An element's representation is not one of the recognized numeric kinds.
    UnsupportedType {
        /// Name of the offending representation (e.g., "bool").
        kind: &'static str,
    },

    /// The requested rank is outside the valid bound `[0, len)`.
    RankOutOfRange {
        /// The rank requested.
        rank: usize,
        /// Number of elements in the ring.
        len: usize,
    },

    /// An element expected to be an integer has another representation.
    NotAnInteger {
        /// Name of the offending representation (e.g., "f64").
        kind: &'static str,
    },

    /// A normalized element is NaN or infinite.
    InvalidNumericValue(String),

    /// Selected strategy does not support the requested feature.
    UnsupportedFeature {
        /// Name of the strategy (e.g., "Readable", "Performant").
        strategy: &'static str,
        /// Name of the unsupported feature.
        feature: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for RingMinError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Ring is empty"),
            Self::Parse { text } => {
                write!(f, "Unparsable numeric text: {text:?}")
            }
            Self::UnsupportedType { kind } => {
                write!(f, "Unsupported element representation: {kind}")
            }
            Self::RankOutOfRange { rank, len } => {
                write!(f, "Rank {rank} out of range (ring has {len} elements)")
            }
            Self::NotAnInteger { kind } => {
                write!(f, "Expected an integer element, found {kind}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::UnsupportedFeature { strategy, feature } => {
                write!(f, "Strategy '{strategy}' does not support feature: {feature}")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for RingMinError {}

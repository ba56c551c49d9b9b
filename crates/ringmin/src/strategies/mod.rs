//! Layer 4: Strategies
//!
//! # Purpose
//!
//! This layer provides one builder/runner pair per selection strategy. A
//! builder validates its configuration at `build()`; the resulting runner
//! validates the ring and delegates to the matching algorithm pass.

/// Type-flexible rank selection.
pub mod flexible;

/// Single-pass linear scan.
pub mod performant;

/// Sort-based minimum.
pub mod readable;

//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer holds the three selection passes over a ring. Each pass is a
//! pure function: it reads the ring, allocates whatever scratch it needs,
//! and returns a value or an error. Nothing in this layer retains state
//! between calls.

/// Rank selection over normalized mixed representations.
pub mod rank;

/// Single-pass linear scan over integers.
pub mod scan;

/// Sort-based minimum over integers.
pub mod sorted;
